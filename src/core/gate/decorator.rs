use tracing::debug;

use crate::core::channel::error::Error;
use crate::core::channel::handler::recv_packet;
use crate::core::gate::context::GateContext;
use crate::core::gate::tx::{GateMsg, Tx};
use crate::events::Event;
use crate::handler::HandlerOutput;

/// One stage of the pre-execution check chain. A stage inspects the whole
/// transaction, may mutate the working view of state, and rejects by
/// returning an error — which stops the chain and voids the transaction.
pub trait Decorator<Ctx: GateContext> {
    fn run(&self, ctx: &mut Ctx, tx: &Tx, simulate: bool) -> Result<Vec<Event>, Error>;
}

/// The stage that verifies inbound packet messages: channel and connection
/// resolution, membership proof against the recorded snapshot, and delivery
/// ordering. Runs once per packet message found in the transaction; messages
/// outside its scope are left to other stages.
#[derive(Clone, Debug, Default)]
pub struct ProofVerificationDecorator;

impl ProofVerificationDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl<Ctx: GateContext> Decorator<Ctx> for ProofVerificationDecorator {
    fn run(&self, ctx: &mut Ctx, tx: &Tx, _simulate: bool) -> Result<Vec<Event>, Error> {
        let mut events = Vec::new();

        for msg in tx.msgs() {
            match msg {
                GateMsg::RecvPacket(msg) => {
                    let HandlerOutput {
                        result,
                        log,
                        events: handler_events,
                    } = recv_packet::process(&*ctx, msg.clone())?;

                    // Delivery bookkeeping lands in the same working view as
                    // the checks; it commits or rolls back with the whole
                    // transaction.
                    ctx.store_packet_result(result)?;

                    for entry in log {
                        debug!("{}", entry);
                    }
                    events.extend(handler_events);
                }
            }
        }

        Ok(events)
    }
}

/// An ordered chain of decorators with a single entry point.
pub struct Gate<Ctx: GateContext> {
    decorators: Vec<Box<dyn Decorator<Ctx>>>,
}

impl<Ctx: GateContext> Gate<Ctx> {
    pub fn new() -> Self {
        Self {
            decorators: Vec::new(),
        }
    }

    pub fn with_decorator(mut self, decorator: impl Decorator<Ctx> + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    /// Runs every stage, in order, against a scoped clone of `ctx`.
    ///
    /// On success the updated clone is returned for the caller to commit
    /// together with the rest of the transaction's effects. On the first
    /// failure the clone is dropped whole — the caller's context never
    /// observes partial effects.
    pub fn handle(&self, ctx: &Ctx, tx: &Tx, simulate: bool) -> Result<(Ctx, Vec<Event>), Error> {
        let mut working = ctx.clone();
        let mut events = Vec::new();

        for decorator in &self.decorators {
            events.extend(decorator.run(&mut working, tx, simulate)?);
        }

        Ok((working, events))
    }
}

impl<Ctx: GateContext> Default for Gate<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}
