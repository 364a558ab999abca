//! Types shared between the link and radio layers.

use core::fmt::{Display, Formatter, Result};

use bitfield_struct::bitfield;

/// The radio's mode as last commanded by this driver.
///
/// This mirrors, but does not replace, the chip's own CONFIG/STATUS
/// registers: the chip is ground truth, this enum is the local hint used to
/// decide whether a pending-transmission check is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioState {
    /// The radio is powered down (PWR_UP cleared).
    PowerDown,
    /// The radio is listening (PRIM_RX set).
    Rx,
    /// The radio was last commanded to transmit.
    Tx,
}

impl Display for RadioState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RadioState::PowerDown => write!(f, "PowerDown"),
            RadioState::Rx => write!(f, "Rx"),
            RadioState::Tx => write!(f, "Tx"),
        }
    }
}

/// A decoded view of the radio's STATUS register.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// Is there RX data ready to read?
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// Was TX data sent (or auto-acknowledged)?
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// Did a transmission fail after the maximum number of retransmits?
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The pipe number holding the next available RX payload (7 if none).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}
