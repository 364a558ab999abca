//! Transport layer abstraction for the Bus Pirate's serial link.

use crate::error::Result;

/// An ordered, reliable byte stream to and from the adapter.
pub trait Transport {
    /// Write all of `data` to the transport.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read exactly `buf.len()` bytes into the buffer.
    fn read(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Read whatever is buffered, up to `buf.len()` bytes, waiting at most
    /// `timeout_ms` milliseconds for more to arrive.
    ///
    /// Returns the number of bytes read. A timeout is a partial (or empty)
    /// read, not an error.
    fn drain(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize>;

    /// Flush any buffered outgoing data.
    fn flush(&mut self) -> Result<()>;
}

pub mod serial {
    //! Serial port transport implementation.

    use std::io::{Read, Write};
    use std::time::Duration;

    use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

    use super::Transport;
    use crate::error::{Error, Result};

    /// Serial port transport.
    pub struct SerialTransport {
        port: Box<dyn SerialPort>,
    }

    impl SerialTransport {
        /// Open a serial port at the given baud rate (115200 if `None`).
        pub fn open(device: &str, baud: Option<u32>) -> Result<Self> {
            let baud_rate = baud.unwrap_or(115200);

            let port = serialport::new(device, baud_rate)
                .data_bits(DataBits::Eight)
                .parity(Parity::None)
                .stop_bits(StopBits::One)
                .flow_control(FlowControl::None)
                .timeout(Duration::from_secs(1))
                .open()?;

            log::info!("Opened serial port {} at {} baud", device, baud_rate);

            Ok(Self { port })
        }

        /// Set the read timeout.
        pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
            self.port.set_timeout(timeout)?;
            Ok(())
        }
    }

    impl Transport for SerialTransport {
        fn write(&mut self, data: &[u8]) -> Result<()> {
            self.port.write_all(data)?;
            Ok(())
        }

        fn read(&mut self, buf: &mut [u8]) -> Result<()> {
            self.port.read_exact(buf)?;
            Ok(())
        }

        fn drain(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize> {
            let old_timeout = self.port.timeout();
            self.port
                .set_timeout(Duration::from_millis(u64::from(timeout_ms)))?;

            let mut total = 0;
            while total < buf.len() {
                match self.port.read(&mut buf[total..]) {
                    Ok(0) => break,
                    Ok(n) => total += n,
                    Err(e) if e.kind() == std::io::ErrorKind::TimedOut => break,
                    Err(e) => {
                        // the read failure is the root cause; the restore
                        // failing too must not mask it
                        let _ = self.port.set_timeout(old_timeout);
                        return Err(Error::from(e));
                    }
                }
            }

            self.port.set_timeout(old_timeout)?;
            Ok(total)
        }

        fn flush(&mut self) -> Result<()> {
            self.port.flush()?;
            Ok(())
        }
    }
}
