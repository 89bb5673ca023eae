/*!
 * Stream capability checks.
 *
 * Capabilities follow the I/O traits a type implements. A `File` is the
 * exception: on unix its access mode is read from the descriptor, so a file
 * opened read-only does not report writing. Other platforms have no portable
 * query and report both.
 */

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Empty, Seek, Sink, Stderr, Stdin, Stdout, Write};
use std::net::TcpStream;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::{quoted, short_type_name};

/// What an I/O stream supports
pub trait StreamCapabilities {
    fn can_read(&self) -> bool;

    fn can_write(&self) -> bool;

    fn can_seek(&self) -> bool;

    /// Current offset, or `None` when the stream cannot report one
    fn position(&mut self) -> Option<u64>;

    /// Concrete type name used in messages
    fn type_name(&self) -> String {
        short_type_name::<Self>()
    }
}

macro_rules! impl_cursor {
    ($writable:expr => $($t:ty),+ $(,)?) => {
        $(
            impl StreamCapabilities for Cursor<$t> {
                fn can_read(&self) -> bool {
                    true
                }

                fn can_write(&self) -> bool {
                    $writable
                }

                fn can_seek(&self) -> bool {
                    true
                }

                fn position(&mut self) -> Option<u64> {
                    Some(Cursor::position(self))
                }
            }
        )+
    };
}

impl_cursor!(true => Vec<u8>, &mut Vec<u8>, &mut [u8], Box<[u8]>);
impl_cursor!(false => &[u8], &Vec<u8>, String, &str);

/// Whether the descriptor was opened for reading and for writing
#[cfg(unix)]
fn file_access(file: &File) -> (bool, bool) {
    use log::debug;
    use nix::fcntl::{fcntl, FcntlArg, OFlag};
    use std::os::fd::AsRawFd;

    match fcntl(file.as_raw_fd(), FcntlArg::F_GETFL) {
        Ok(flags) => {
            let mode = OFlag::from_bits_truncate(flags) & OFlag::O_ACCMODE;
            (mode != OFlag::O_WRONLY, mode != OFlag::O_RDONLY)
        }
        Err(err) => {
            debug!("cannot read file access mode: {}", err);
            (false, false)
        }
    }
}

#[cfg(not(unix))]
fn file_access(_file: &File) -> (bool, bool) {
    (true, true)
}

impl StreamCapabilities for File {
    fn can_read(&self) -> bool {
        file_access(self).0
    }

    fn can_write(&self) -> bool {
        file_access(self).1
    }

    fn can_seek(&self) -> bool {
        true
    }

    fn position(&mut self) -> Option<u64> {
        self.stream_position().ok()
    }
}

// Non-seekable streams: fixed capabilities and no position.
macro_rules! impl_unseekable {
    ($($t:ty => ($read:expr, $write:expr)),+ $(,)?) => {
        $(
            impl StreamCapabilities for $t {
                fn can_read(&self) -> bool {
                    $read
                }

                fn can_write(&self) -> bool {
                    $write
                }

                fn can_seek(&self) -> bool {
                    false
                }

                fn position(&mut self) -> Option<u64> {
                    None
                }
            }
        )+
    };
}

impl_unseekable!(
    Stdin => (true, false),
    Stdout => (false, true),
    Stderr => (false, true),
    Sink => (false, true),
    TcpStream => (true, true),
);

impl StreamCapabilities for Empty {
    fn can_read(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        true
    }

    fn position(&mut self) -> Option<u64> {
        self.stream_position().ok()
    }
}

// Buffered wrappers report the logical position, not the inner one.
impl<R: StreamCapabilities> StreamCapabilities for BufReader<R> {
    fn can_read(&self) -> bool {
        self.get_ref().can_read()
    }

    fn can_write(&self) -> bool {
        false
    }

    fn can_seek(&self) -> bool {
        self.get_ref().can_seek()
    }

    fn position(&mut self) -> Option<u64> {
        let buffered = self.buffer().len() as u64;
        self.get_mut().position().map(|inner| inner.saturating_sub(buffered))
    }
}

impl<W: StreamCapabilities + Write> StreamCapabilities for BufWriter<W> {
    fn can_read(&self) -> bool {
        false
    }

    fn can_write(&self) -> bool {
        self.get_ref().can_write()
    }

    fn can_seek(&self) -> bool {
        self.get_ref().can_seek()
    }

    fn position(&mut self) -> Option<u64> {
        let buffered = self.buffer().len() as u64;
        self.get_mut().position().map(|inner| inner + buffered)
    }
}

impl<S: StreamCapabilities + ?Sized> StreamCapabilities for &mut S {
    fn can_read(&self) -> bool {
        (**self).can_read()
    }

    fn can_write(&self) -> bool {
        (**self).can_write()
    }

    fn can_seek(&self) -> bool {
        (**self).can_seek()
    }

    fn position(&mut self) -> Option<u64> {
        (**self).position()
    }

    fn type_name(&self) -> String {
        (**self).type_name()
    }
}

impl<S: StreamCapabilities + ?Sized> StreamCapabilities for Box<S> {
    fn can_read(&self) -> bool {
        (**self).can_read()
    }

    fn can_write(&self) -> bool {
        (**self).can_write()
    }

    fn can_seek(&self) -> bool {
        (**self).can_seek()
    }

    fn position(&mut self) -> Option<u64> {
        (**self).position()
    }

    fn type_name(&self) -> String {
        (**self).type_name()
    }
}

fn stream_error<S: StreamCapabilities + ?Sized>(
    stream: &S,
    param: Param<'_>,
    problem: &str,
) -> ArgumentError {
    ArgumentError::raise(ErrorKind::InvalidArgument, param.name(), param.message(), || {
        format!(
            "Stream {} ({}) {}.",
            quoted(param.name()),
            stream.type_name(),
            problem
        )
    })
}

pub fn can_read<S: StreamCapabilities>(stream: S, param: Param<'_>) -> Result<S> {
    if stream.can_read() {
        return Ok(stream);
    }
    Err(stream_error(&stream, param, "doesn't support reading"))
}

pub fn can_write<S: StreamCapabilities>(stream: S, param: Param<'_>) -> Result<S> {
    if stream.can_write() {
        return Ok(stream);
    }
    Err(stream_error(&stream, param, "doesn't support writing"))
}

pub fn can_seek<S: StreamCapabilities>(stream: S, param: Param<'_>) -> Result<S> {
    if stream.can_seek() {
        return Ok(stream);
    }
    Err(stream_error(&stream, param, "doesn't support seeking"))
}

/// Require the stream to sit at offset zero
pub fn at_start_position<S: StreamCapabilities>(mut stream: S, param: Param<'_>) -> Result<S> {
    if stream.position() == Some(0) {
        return Ok(stream);
    }
    Err(stream_error(&stream, param, "is not at the starting position"))
}
