//! What a driver wants the caller to do after each incoming message.

use freespace_hid_protocol::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrsEvent {
    /// The message does not belong to this transfer.
    Ignored,
    /// The device is busy; re-send [`last_request`](crate::FrsReader::last_request)
    /// when ready.
    Busy,
    /// Accepted; wait for the next response.
    Progress,
    /// Accepted; send this request next.
    Send(Message),
    /// The transfer finished successfully.
    Complete,
}

/// Lifecycle shared by both drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    /// `start` has not been called.
    Idle,
    Running,
    Complete,
    Failed,
}
