//! Output plumbing shared by the commands.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `io::Write` adapter over the `minus` pager.
///
/// Rendered diffs contain arbitrary Unicode, and a single `write` call may end
/// in the middle of a multi-byte character. Incomplete trailing bytes are held
/// back until the rest of the character arrives.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    #[new(default)]
    pending: Vec<u8>,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid_up_to = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => {
                // drop the rejected bytes so later writes are not poisoned
                self.pending.clear();
                return Err(io::Error::new(io::ErrorKind::InvalidData, err));
            }
        };

        let complete = self.pending.drain(..valid_up_to).collect::<Vec<_>>();
        let text = std::str::from_utf8(&complete)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "incomplete UTF-8 sequence at end of output",
            ))
        }
    }
}
