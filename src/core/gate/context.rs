use crate::core::channel::context::{ChannelKeeper, ChannelReader};
use crate::core::client::context::ClientReader;

/// The full state surface the decorator chain runs against: channel and
/// connection lookups, the snapshot store, and the delivery bookkeeping
/// writers.
///
/// `Gate::handle` runs every stage against a cloned working view and returns
/// it for the caller to commit; a failing transaction leaves the original
/// context untouched.
pub trait GateContext: ChannelReader + ChannelKeeper + ClientReader + Clone {}

impl<Ctx> GateContext for Ctx where Ctx: ChannelReader + ChannelKeeper + ClientReader + Clone {}
