//! Whole-record FRS writes.
//!
//! A write is a `write_request` announcing the record length followed by
//! one `write_data` per word. The device acknowledges every step with
//! status 0 and closes the record with `Completed` or `RecordValid`.

use freespace_hid_protocol::{FrsWriteAck, FrsWriteStatus, Message};
use tracing::{debug, trace, warn};

use crate::config::FrsTransferConfig;
use crate::error::{FrsError, FrsResult};
use crate::event::{FrsEvent, TransferState};

#[derive(Debug, Clone)]
pub struct FrsWriter {
    config: FrsTransferConfig,
    frs_type: u16,
    words: Vec<u32>,
    length: u16,
    /// Index of the next word to send.
    next_word: usize,
    state: TransferState,
}

impl FrsWriter {
    /// Prepare a write of `words` to record `frs_type`. An empty `words`
    /// invalidates the record.
    pub fn new(config: FrsTransferConfig, frs_type: u16, words: Vec<u32>) -> FrsResult<Self> {
        config.validate()?;
        let length = u16::try_from(words.len()).map_err(|_overflow| FrsError::RecordTooLarge(words.len()))?;
        Ok(Self {
            config,
            frs_type,
            words,
            length,
            next_word: 0,
            state: TransferState::Idle,
        })
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn frs_type(&self) -> u16 {
        self.frs_type
    }

    /// Words not yet sent.
    pub fn remaining(&self) -> usize {
        self.words.len().saturating_sub(self.next_word)
    }

    /// Begin (or restart) the write with the length announcement.
    pub fn start(&mut self) -> Message {
        debug!(
            store = ?self.config.store,
            frs_type = self.frs_type,
            length = self.length,
            "starting FRS write"
        );
        self.next_word = 0;
        self.state = TransferState::Running;
        self.config.store.write_request(self.frs_type, self.length)
    }

    /// The most recent request, for re-sending after `Busy`.
    pub fn last_request(&self) -> Message {
        match self.next_word.checked_sub(1) {
            None => self.config.store.write_request(self.frs_type, self.length),
            Some(index) => self.data_request(index),
        }
    }

    fn data_request(&self, index: usize) -> Message {
        let word = self.words.get(index).copied().unwrap_or_default();
        let offset = u16::try_from(index).unwrap_or(u16::MAX);
        self.config.store.write_data(offset, word)
    }

    /// Feed one decoded message from the device.
    ///
    /// # Errors
    ///
    /// [`FrsError::WriteRejected`] for any failure status,
    /// [`FrsError::UnknownStatus`] for a code outside the write vocabulary.
    pub fn handle(&mut self, message: &Message) -> FrsResult<FrsEvent> {
        if self.state != TransferState::Running {
            return Ok(FrsEvent::Ignored);
        }
        let Some(ack) = message.as_frs_write_ack() else {
            return Ok(FrsEvent::Ignored);
        };
        if ack.store() != self.config.store {
            return Ok(FrsEvent::Ignored);
        }

        let Some(status) = ack.write_status() else {
            self.state = TransferState::Failed;
            warn!(status = ack.status(), "unknown FRS write status");
            return Err(FrsError::UnknownStatus(ack.status()));
        };
        trace!(word_offset = ack.word_offset(), ?status, "FRS write ack");

        if status == FrsWriteStatus::Busy {
            debug!(frs_type = self.frs_type, "FRS write busy");
            return Ok(FrsEvent::Busy);
        }
        if status.is_failure() {
            self.state = TransferState::Failed;
            warn!(frs_type = self.frs_type, ?status, "FRS write rejected");
            return Err(FrsError::WriteRejected {
                frs_type: self.frs_type,
                status,
            });
        }
        if status.is_complete() {
            self.state = TransferState::Complete;
            debug!(frs_type = self.frs_type, words = self.words.len(), "FRS write complete");
            return Ok(FrsEvent::Complete);
        }

        if self.next_word < self.words.len() {
            let request = self.data_request(self.next_word);
            self.next_word = self.next_word.saturating_add(1);
            return Ok(FrsEvent::Send(request));
        }
        Ok(FrsEvent::Progress)
    }

    pub fn is_complete(&self) -> bool {
        self.state == TransferState::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freespace_hid_protocol::{FrsEflashWriteResponse, FrsStore, FrsWriteResponse};

    fn ack(status: FrsWriteStatus) -> Message {
        Message::from(FrsWriteResponse {
            status: status as u8,
            word_offset: 0,
        })
    }

    #[test]
    fn test_write_sends_each_word_then_completes() -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = FrsWriter::new(FrsTransferConfig::default(), 0x0007, vec![0xA, 0xB])?;
        let Message::FrsWriteRequest(request) = writer.start() else {
            return Err("expected a write request".into());
        };
        assert_eq!(request.length, 2);

        let event = writer.handle(&ack(FrsWriteStatus::NoError))?;
        assert_eq!(event, FrsEvent::Send(FrsStore::Unified.write_data(0, 0xA)));
        let event = writer.handle(&ack(FrsWriteStatus::NoError))?;
        assert_eq!(event, FrsEvent::Send(FrsStore::Unified.write_data(1, 0xB)));
        assert_eq!(writer.remaining(), 0);
        assert_eq!(writer.last_request(), FrsStore::Unified.write_data(1, 0xB));

        assert_eq!(writer.handle(&ack(FrsWriteStatus::NoError))?, FrsEvent::Progress);
        assert_eq!(writer.handle(&ack(FrsWriteStatus::RecordValid))?, FrsEvent::Complete);
        assert!(writer.is_complete());
        Ok(())
    }

    #[test]
    fn test_busy_then_resend_last_request() -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = FrsWriter::new(FrsTransferConfig::default(), 0x0007, vec![1])?;
        let first = writer.start();
        assert_eq!(writer.handle(&ack(FrsWriteStatus::Busy))?, FrsEvent::Busy);
        assert_eq!(writer.last_request(), first);
        Ok(())
    }

    #[test]
    fn test_rejections() -> Result<(), Box<dyn std::error::Error>> {
        for status in [
            FrsWriteStatus::UnrecognizedType,
            FrsWriteStatus::AlreadyWriting,
            FrsWriteStatus::WriteFailed,
            FrsWriteStatus::DataWhileNotWriting,
            FrsWriteStatus::InvalidLength,
            FrsWriteStatus::RecordInvalid,
        ] {
            let mut writer = FrsWriter::new(FrsTransferConfig::default(), 0x0007, vec![1])?;
            writer.start();
            assert_eq!(
                writer.handle(&ack(status)),
                Err(FrsError::WriteRejected {
                    frs_type: 0x0007,
                    status
                })
            );
            assert_eq!(writer.state(), TransferState::Failed);
        }
        Ok(())
    }

    #[test]
    fn test_ack_from_other_store_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = FrsWriter::new(FrsTransferConfig::default(), 0x0007, vec![1])?;
        writer.start();
        let foreign = Message::from(FrsEflashWriteResponse {
            word_offset: 0,
            status: FrsWriteStatus::Completed as u8,
        });
        assert_eq!(writer.handle(&foreign)?, FrsEvent::Ignored);
        assert_eq!(writer.state(), TransferState::Running);
        Ok(())
    }

    #[test]
    fn test_record_too_large() {
        let words = vec![0u32; usize::from(u16::MAX) + 1];
        assert!(matches!(
            FrsWriter::new(FrsTransferConfig::default(), 1, words),
            Err(FrsError::RecordTooLarge(65_536))
        ));
    }
}
