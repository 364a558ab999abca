use thiserror::Error;

/// Errors surfaced by the link and radio layers.
#[derive(Debug, Error)]
pub enum Error {
    /// The Bus Pirate never acknowledged entry into binary SPI mode.
    ///
    /// Fatal at open time; the caller must not proceed with this link.
    #[error("Bus Pirate handshake failed: binary SPI mode marker not received")]
    LinkInit,

    /// A command was answered with something other than the ack byte (`0x01`).
    ///
    /// The link is desynchronized and cannot be recovered in place. Close the
    /// transport and reopen it.
    #[error("link desynchronized: expected ack 0x01, got 0x{0:02X}")]
    Protocol(u8),

    /// A bulk transfer was requested outside the Bus Pirate's 1..=16 byte window.
    #[error("transfer of {0} bytes is outside the 1..=16 byte bulk limit")]
    TransferSize(usize),

    /// The radio reported neither "data sent" nor "max retransmits" within the
    /// configured send timeout.
    #[error("timed out waiting for a pending transmission to complete")]
    TxTimeout,

    /// Serial port error.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O error on the underlying transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for link and radio operations.
pub type Result<T> = core::result::Result<T, Error>;
