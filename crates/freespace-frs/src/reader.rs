//! Whole-record FRS reads.

use freespace_hid_protocol::{FrsReadChunk, FrsReadStatus, Message};
use tracing::{debug, trace, warn};

use crate::config::FrsTransferConfig;
use crate::error::{FrsError, FrsResult};
use crate::event::{FrsEvent, TransferState};

/// Reads one FRS record block by block.
///
/// ```
/// use freespace_frs::{FrsEvent, FrsReader, FrsTransferConfig};
///
/// let mut reader = FrsReader::new(FrsTransferConfig::default(), 0x1234)?;
/// let request = reader.start();
/// // ... encode `request`, send it, feed decoded responses to `reader.handle`
/// # let _ = request;
/// # Ok::<(), freespace_frs::FrsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrsReader {
    config: FrsTransferConfig,
    frs_type: u16,
    record: Vec<u32>,
    block_offset: u16,
    state: TransferState,
}

impl FrsReader {
    pub fn new(config: FrsTransferConfig, frs_type: u16) -> FrsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            frs_type,
            record: Vec::new(),
            block_offset: 0,
            state: TransferState::Idle,
        })
    }

    pub fn config(&self) -> &FrsTransferConfig {
        &self.config
    }

    pub fn frs_type(&self) -> u16 {
        self.frs_type
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    /// Begin (or restart) the read from word 0.
    pub fn start(&mut self) -> Message {
        debug!(
            store = ?self.config.store,
            frs_type = self.frs_type,
            block_size = self.config.block_size,
            "starting FRS read"
        );
        self.record.clear();
        self.block_offset = 0;
        self.state = TransferState::Running;
        self.last_request()
    }

    /// The request for the block currently being read.
    pub fn last_request(&self) -> Message {
        self.config
            .store
            .read_request(self.frs_type, self.block_offset, self.config.block_size)
    }

    /// Feed one decoded message from the device.
    ///
    /// # Errors
    ///
    /// [`FrsError::ReadRejected`] when the device reports an unknown record,
    /// an out-of-range offset or an empty record; [`FrsError::UnknownStatus`]
    /// for a status outside the read vocabulary. The reader is then failed.
    pub fn handle(&mut self, message: &Message) -> FrsResult<FrsEvent> {
        if self.state != TransferState::Running {
            return Ok(FrsEvent::Ignored);
        }
        let Some(chunk) = message.as_frs_read_chunk() else {
            return Ok(FrsEvent::Ignored);
        };
        if chunk.store() != self.config.store || chunk.frs_type() != self.frs_type {
            trace!(frs_type = chunk.frs_type(), "ignoring chunk for another record");
            return Ok(FrsEvent::Ignored);
        }

        let Some(status) = chunk.read_status() else {
            self.state = TransferState::Failed;
            warn!(status = chunk.status(), "unknown FRS read status");
            return Err(FrsError::UnknownStatus(chunk.status()));
        };
        if status == FrsReadStatus::Busy {
            debug!(frs_type = self.frs_type, "FRS read busy");
            return Ok(FrsEvent::Busy);
        }
        if status.is_failure() {
            self.state = TransferState::Failed;
            warn!(frs_type = self.frs_type, ?status, "FRS read rejected");
            return Err(FrsError::ReadRejected {
                frs_type: self.frs_type,
                status,
            });
        }

        let end = self.place(chunk);
        trace!(
            word_offset = chunk.word_offset(),
            words = chunk.words().len(),
            ?status,
            "FRS read chunk"
        );

        if status.is_record_complete() {
            self.state = TransferState::Complete;
            debug!(frs_type = self.frs_type, words = self.record.len(), "FRS read complete");
            return Ok(FrsEvent::Complete);
        }
        if status == FrsReadStatus::BlockCompleted {
            self.block_offset = u16::try_from(end).map_err(|_overflow| FrsError::RecordTooLarge(end))?;
            debug!(next_offset = self.block_offset, "FRS block complete, requesting next");
            return Ok(FrsEvent::Send(self.last_request()));
        }
        Ok(FrsEvent::Progress)
    }

    /// Copy the chunk's words into the record at its offset; returns the
    /// index one past the last word written.
    fn place(&mut self, chunk: &dyn FrsReadChunk) -> usize {
        let words = chunk.words();
        let start = usize::from(chunk.word_offset());
        let end = start.saturating_add(words.len());
        if self.record.len() < end {
            self.record.resize(end, 0);
        }
        if let Some(dst) = self.record.get_mut(start..end) {
            dst.copy_from_slice(words);
        }
        end
    }

    pub fn is_complete(&self) -> bool {
        self.state == TransferState::Complete
    }

    /// Words received so far, in record order.
    pub fn record(&self) -> &[u32] {
        &self.record
    }

    pub fn into_record(self) -> Vec<u32> {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freespace_hid_protocol::{FrsLoopReadResponse, FrsReadResponse, FrsStore, MessageType};

    fn unified_chunk(word_offset: u16, words: &[u32], status: FrsReadStatus) -> Message {
        let mut data = [0u32; 3];
        for (dst, src) in data.iter_mut().zip(words) {
            *dst = *src;
        }
        Message::from(FrsReadResponse {
            status: status as u8,
            data_length: words.len() as u8,
            word_offset,
            data,
            frs_type: 0x0042,
        })
    }

    #[test]
    fn test_single_block_read() -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = FrsReader::new(FrsTransferConfig::default(), 0x0042)?;
        assert_eq!(reader.start().message_type(), MessageType::FrsReadRequest);

        let event = reader.handle(&unified_chunk(0, &[1, 2, 3], FrsReadStatus::NoError))?;
        assert_eq!(event, FrsEvent::Progress);
        let event = reader.handle(&unified_chunk(3, &[4], FrsReadStatus::Completed))?;
        assert_eq!(event, FrsEvent::Complete);
        assert_eq!(reader.record(), &[1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_block_completed_requests_next_block() -> Result<(), Box<dyn std::error::Error>> {
        let config = FrsTransferConfig {
            block_size: 3,
            ..FrsTransferConfig::default()
        };
        let mut reader = FrsReader::new(config, 0x0042)?;
        reader.start();
        let event = reader.handle(&unified_chunk(0, &[7, 8, 9], FrsReadStatus::BlockCompleted))?;
        let FrsEvent::Send(Message::FrsReadRequest(next)) = event else {
            return Err(format!("unexpected event {event:?}").into());
        };
        assert_eq!(next.read_offset, 3);
        assert_eq!(next.block_size, 3);
        Ok(())
    }

    #[test]
    fn test_busy_leaves_state_untouched() -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = FrsReader::new(FrsTransferConfig::default(), 0x0042)?;
        reader.start();
        assert_eq!(
            reader.handle(&unified_chunk(0, &[], FrsReadStatus::Busy))?,
            FrsEvent::Busy
        );
        assert_eq!(reader.state(), TransferState::Running);
        assert!(reader.record().is_empty());
        Ok(())
    }

    #[test]
    fn test_rejection_fails_reader() -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = FrsReader::new(FrsTransferConfig::default(), 0x0042)?;
        reader.start();
        assert_eq!(
            reader.handle(&unified_chunk(0, &[], FrsReadStatus::RecordEmpty)),
            Err(FrsError::ReadRejected {
                frs_type: 0x0042,
                status: FrsReadStatus::RecordEmpty
            })
        );
        assert_eq!(reader.state(), TransferState::Failed);
        assert_eq!(
            reader.handle(&unified_chunk(0, &[1], FrsReadStatus::Completed))?,
            FrsEvent::Ignored
        );
        Ok(())
    }

    #[test]
    fn test_other_store_and_record_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = FrsReader::new(FrsTransferConfig::default(), 0x0099)?;
        reader.start();
        assert_eq!(
            reader.handle(&unified_chunk(0, &[1], FrsReadStatus::Completed))?,
            FrsEvent::Ignored
        );
        let loop_chunk = Message::from(FrsLoopReadResponse {
            frs_type: 0x0099,
            status: FrsReadStatus::Completed as u8,
            ..FrsLoopReadResponse::default()
        });
        assert_eq!(reader.handle(&loop_chunk)?, FrsEvent::Ignored);
        assert_eq!(reader.config().store, FrsStore::Unified);
        Ok(())
    }

    #[test]
    fn test_unknown_status() -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = FrsReader::new(FrsTransferConfig::default(), 0x0042)?;
        reader.start();
        let mut msg = FrsReadResponse {
            frs_type: 0x0042,
            ..FrsReadResponse::default()
        };
        msg.status = 0x0E;
        assert_eq!(
            reader.handle(&Message::from(msg)),
            Err(FrsError::UnknownStatus(0x0E))
        );
        Ok(())
    }
}
