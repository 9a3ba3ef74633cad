//! Messages exchanged between the fading text and the runtime.

use bubbletea_rs::Msg;

/// Advances the countdown of one fading text by one tick.
///
/// Only the instance whose id and current tag match acts on the message.
/// Every restart bumps the tag, so ticks still in flight from an earlier
/// cycle are dropped instead of doubling the tick rate.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifier of the fading text this tick belongs to.
    pub id: i64,
    pub(crate) tag: i64,
}

/// Sent once when a fading text clears itself at the end of its countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedMsg {
    /// Identifier of the fading text that cleared.
    pub id: i64,
}

impl From<TickMsg> for Msg {
    fn from(msg: TickMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ClearedMsg> for Msg {
    fn from(msg: ClearedMsg) -> Self {
        Box::new(msg) as Msg
    }
}
