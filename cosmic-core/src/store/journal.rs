//! Append-only on-disk log of storage writes.
//!
//! Layout: `MAGIC | VERSION | (uvarint len | CBOR LogRecord)*`.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{CosmicError, Result};

const MAGIC: &[u8; 8] = b"CSMLOG\0\0";
const VERSION: u8 = 1;
pub const HEADER_LEN: u64 = MAGIC.len() as u64 + 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum LogRecord {
    Set { key: String, value: String },
}

pub struct Journal {
    f: File,
    path: PathBuf,
}

/// `Ok(None)` ends replay: clean EOF, a malformed or overrunning length
/// prefix, or a body that does not decode. `replay` cuts the file there.
fn read_next_record(f: &mut File) -> Result<Option<LogRecord>> {
    let len = match get_uvarint(f) {
        Ok(Some(n)) => n,
        Ok(None) | Err(CosmicError::Format(_)) => return Ok(None),
        Err(e) => return Err(e),
    };

    let remaining = f.metadata()?.len().saturating_sub(f.stream_position()?);
    if len > remaining {
        return Ok(None);
    }

    let mut buf = vec![0u8; len as usize];
    if let Err(e) = f.read_exact(&mut buf) {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            return Ok(None);
        }
        return Err(e.into());
    }

    match serde_cbor::from_slice(&buf) {
        Ok(rec) => Ok(Some(rec)),
        Err(e) => {
            tracing::warn!(error = %e, "undecodable journal record");
            Ok(None)
        }
    }
}

fn put_uvarint(out: &mut Vec<u8>, mut x: u64) {
    while x >= 0x80 {
        out.push((x as u8) | 0x80);
        x >>= 7;
    }
    out.push(x as u8);
}

/// `Ok(None)` on EOF, including EOF partway through the varint.
fn get_uvarint<R: Read>(r: &mut R) -> Result<Option<u64>> {
    let mut x: u64 = 0;
    let mut s: u32 = 0;
    for _ in 0..10 {
        let mut b = [0u8; 1];
        match r.read(&mut b) {
            Ok(0) => return Ok(None),
            Ok(_) => {
                let byte = b[0];
                if byte < 0x80 {
                    x |= (byte as u64) << s;
                    return Ok(Some(x));
                }
                x |= ((byte & 0x7f) as u64) << s;
                s += 7;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(CosmicError::Format("varint too long".into()))
}

impl Journal {
    pub fn open(path: &Path) -> Result<Self> {
        let mut f = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        if f.metadata()?.len() == 0 {
            f.write_all(MAGIC)?;
            f.write_all(&[VERSION])?;
            f.flush()?;
        } else {
            let mut magic = [0u8; 8];
            f.read_exact(&mut magic).map_err(|_| {
                CosmicError::Format(format!("{}: truncated journal header", path.display()))
            })?;
            if &magic != MAGIC {
                return Err(CosmicError::Format(format!(
                    "{}: not a state journal",
                    path.display()
                )));
            }
            let mut ver = [0u8; 1];
            f.read_exact(&mut ver)?;
            if ver[0] != VERSION {
                return Err(CosmicError::Format(format!(
                    "{}: unsupported journal version {}",
                    path.display(),
                    ver[0]
                )));
            }
        }

        f.seek(SeekFrom::End(0))?;
        Ok(Self {
            f,
            path: path.to_path_buf(),
        })
    }

    /// Append a single record (length-delimited) and flush.
    pub fn append(&mut self, rec: &LogRecord) -> Result<()> {
        let mut plain = Vec::with_capacity(128);
        serde_cbor::to_writer(&mut plain, rec)
            .map_err(|e| CosmicError::Format(format!("journal encode: {e}")))?;

        let mut framed = Vec::with_capacity(plain.len() + 10);
        put_uvarint(&mut framed, plain.len() as u64);
        framed.extend_from_slice(&plain);
        self.f.write_all(&framed)?;
        self.f.flush()?;
        Ok(())
    }

    /// Feeds every complete record to `apply`, in write order. A torn or
    /// corrupt tail is cut off so later appends stay aligned. Returns the
    /// number of records replayed.
    pub fn replay<F: FnMut(LogRecord)>(&mut self, mut apply: F) -> Result<usize> {
        self.f.flush()?;
        self.f.seek(SeekFrom::Start(HEADER_LEN))?;
        let mut good_end = HEADER_LEN;
        let mut n = 0;
        while let Some(rec) = read_next_record(&mut self.f)? {
            apply(rec);
            n += 1;
            good_end = self.f.stream_position()?;
        }
        let file_len = self.f.metadata()?.len();
        if file_len > good_end {
            tracing::warn!(
                path = %self.path.display(),
                dropped = file_len - good_end,
                "truncating torn journal tail"
            );
            self.f.set_len(good_end)?;
        }
        self.f.seek(SeekFrom::End(0))?;
        Ok(n)
    }
}
