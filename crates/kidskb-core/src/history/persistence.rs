use std::fs;
use std::io;
use std::path::Path;

use super::{History, HistoryData, HistoryError, MAGIC, VERSION};

const HEADER_LEN: usize = 4 + 1 + 4;

impl History {
    /// Serialize to bytes (KKHS format): magic, version, CRC32 of body, body.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HistoryError> {
        let data = HistoryData {
            words: self.words.clone(),
        };
        let body = bincode::serialize(&data).map_err(HistoryError::Serialize)?;

        let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (KKHS format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HistoryError> {
        if bytes.len() < HEADER_LEN {
            return Err(HistoryError::InvalidHeader);
        }
        if &bytes[0..4] != MAGIC {
            return Err(HistoryError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(HistoryError::UnsupportedVersion(bytes[4]));
        }
        let mut crc = [0u8; 4];
        crc.copy_from_slice(&bytes[5..HEADER_LEN]);
        let body = &bytes[HEADER_LEN..];
        if crc32fast::hash(body) != u32::from_le_bytes(crc) {
            return Err(HistoryError::ChecksumMismatch);
        }
        let data: HistoryData = bincode::deserialize(body).map_err(HistoryError::Deserialize)?;
        Ok(Self::from_words(data.words))
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open from file, returning an empty History if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }
}
