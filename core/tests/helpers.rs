#![allow(unused)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bip39::{Language, Mnemonic, Seed};
use log::{debug, trace};

use stellar_hw_core::{
    engine::{
        failure, ButtonEvent, Decision, Dispatcher, Driver, Engine, Error, Output, Prompt,
        Slip10Key, State,
    },
    proto::{Message, MessageType},
    tx::{xdr::TxEnvelope, Transaction},
};
use stellar_hw_tests::{vectors::Vector, Exchange};

pub use stellar_hw_tests::vectors::MNEMONIC;

pub fn setup() {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default());
}

/// In-process device, routing frames through the engine dispatcher
#[derive(Clone)]
pub struct TestEngine {
    pub engine: Arc<Mutex<Engine<TestDriver>>>,
    dispatcher: Arc<Dispatcher<Engine<TestDriver>>>,
    responses: Arc<Mutex<VecDeque<Vec<u8>>>>,
}

impl TestEngine {
    pub fn new(drv: TestDriver) -> Self {
        Self {
            engine: Arc::new(Mutex::new(Engine::new(drv))),
            dispatcher: Arc::new(Engine::dispatcher()),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Engine with a driver for the shared test mnemonic
    pub fn unlocked() -> Self {
        Self::new(TestDriver::new(MNEMONIC))
    }

    pub fn state(&self) -> State {
        self.engine.lock().unwrap().state()
    }

    /// Prompts rendered by the driver
    pub fn prompts(&self) -> Vec<String> {
        self.engine.lock().unwrap().driver().prompts.clone()
    }

    pub fn lock(&self) {
        self.engine.lock().unwrap().driver_mut().locked = true;
    }

    /// Number of responses waiting to be received
    pub fn pending(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    /// Queue the response for an engine output, as a device would on user input
    fn respond(&self, r: Result<Output, Error>) {
        let m = match r {
            Ok(o) => o.to_message(),
            Err(e) => Some(failure(&e)),
        };

        if let Some(m) = m {
            debug!("resp: {:?}", m);
            self.responses.lock().unwrap().push_back(m.encode());
        }
    }

    /// Feed physical button events to the engine
    pub fn press(&self, buttons: &[ButtonEvent]) {
        for b in buttons {
            let r = self.engine.lock().unwrap().input(*b);
            self.respond(r);
        }
    }

    /// Apply a touch decision to the displayed prompt
    pub fn decide(&self, d: Decision) {
        let r = self.engine.lock().unwrap().decide(d);
        self.respond(r);
    }

    pub fn disconnect(&self) -> Result<(), Error> {
        self.engine.lock().unwrap().disconnect()
    }
}

#[async_trait]
impl Exchange for TestEngine {
    type Error = stellar_hw_tests::Error;

    async fn send(&self, frame: &[u8]) -> Result<(), Self::Error> {
        trace!("cmd: {:02x?}", frame);

        let mut e = self.engine.lock().unwrap();

        if let Some(r) = self.dispatcher.dispatch_frame(&mut e, frame) {
            self.responses.lock().unwrap().push_back(r);
        }

        Ok(())
    }

    async fn recv(&self) -> Result<Vec<u8>, Self::Error> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(stellar_hw_tests::Error::NoResponse)
    }
}

/// Driver implementation for test use
pub struct TestDriver {
    /// BIP39 Mnemonic derived seed
    pub seed: [u8; 64],
    /// Reject key derivation
    pub locked: bool,
    /// Rendered prompts
    pub prompts: Vec<String>,
}

impl TestDriver {
    pub fn new(mnemonic: &str) -> Self {
        let m = Mnemonic::from_phrase(mnemonic, Language::English).unwrap();
        let seed = Seed::new(&m, "");

        let mut b = [0u8; 64];
        b.copy_from_slice(seed.as_bytes());

        Self {
            seed: b,
            locked: false,
            prompts: vec![],
        }
    }
}

impl Driver for TestDriver {
    fn derive_ed25519(&self, path: &[u32]) -> Result<Slip10Key, Error> {
        if self.locked {
            return Err(Error::KeyUnavailable);
        }

        let k = slip10_ed25519::derive_ed25519_private_key(&self.seed, path);
        Ok(Slip10Key::from_raw(k))
    }

    fn render_prompt(&mut self, prompt: &Prompt) {
        debug!("prompt:\n{}", prompt);
        self.prompts.push(prompt.to_string());
    }
}

/// Approve the displayed prompt with the physical buttons
pub async fn approve_tx(e: &TestEngine) {
    debug!("Approve prompt");

    e.press(&[
        ButtonEvent::RightButtonPress,
        ButtonEvent::RightButtonRelease,
        ButtonEvent::BothButtonsPress,
        ButtonEvent::BothButtonsRelease,
    ]);
}

/// Approve the displayed prompt with a touch decision
pub async fn touch_approve(e: &TestEngine) {
    debug!("Approve prompt (touch)");

    e.decide(Decision::confirmed());
}

/// Reject the displayed prompt with the physical buttons
pub async fn reject_tx(e: &TestEngine) {
    debug!("Reject prompt");

    e.press(&[ButtonEvent::BothButtonsPress, ButtonEvent::BothButtonsRelease]);
}

/// Encode the unsigned envelope for a vector through the engine parsers
pub fn encode_envelope(v: &Vector) -> anyhow::Result<Vec<u8>> {
    use stellar_hw_core::engine::Event;

    let req = match Event::parse(&v.request.to_message())? {
        Event::SignTx(r) => r,
        e => anyhow::bail!("unexpected event: {e:?}"),
    };

    let mut ops = vec![];
    for m in &v.operations {
        match Event::parse(m)? {
            Event::Operation(op) => ops.push(op),
            e => anyhow::bail!("unexpected event: {e:?}"),
        }
    }

    let tx = Transaction::new(&req, ops)?;
    let envelope = TxEnvelope::new(tx).to_xdr()?;

    Ok(envelope)
}

/// Serve frames from a single TCP connection to the in-process engine
pub async fn serve(listener: tokio::net::TcpListener, e: TestEngine) -> anyhow::Result<()> {
    use tokio::io::AsyncWriteExt;

    let (mut s, addr) = listener.accept().await?;
    debug!("Connection from {addr}");

    loop {
        let frame = match stellar_hw_tests::tcp::read_frame(&mut s).await {
            Ok(f) => f,
            Err(_) => {
                let _ = e.disconnect();
                return Ok(());
            }
        };

        e.send(&frame).await?;

        while let Ok(r) = e.recv().await {
            s.write_all(&r).await?;
        }
    }
}
