use bitfield_struct::bitfield;

/// The radio's CONFIG register.
///
/// The driver always keeps CRC enabled at 8 bits (EN_CRC set, CRCO clear)
/// and only flips PWR_UP/PRIM_RX when changing mode.
#[bitfield(u8, new = false, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Mask the "RX Data Ready" IRQ when set.
    #[bits(1, access = None)]
    pub mask_rx_dr: bool,

    /// Mask the "TX Data Sent" IRQ when set.
    #[bits(1, access = None)]
    pub mask_tx_ds: bool,

    /// Mask the "max retransmits" IRQ when set.
    #[bits(1, access = None)]
    pub mask_max_rt: bool,

    /// Enable the CRC.
    pub en_crc: bool,

    /// CRC length: 2 bytes when set, 1 byte otherwise.
    #[bits(1, access = None)]
    pub crco: bool,

    /// Power the radio up.
    pub power: bool,

    /// Primary RX when set, primary TX otherwise.
    pub prim_rx: bool,
}

impl Config {
    /// The driver's baseline: CRC enabled, powered down.
    pub fn base() -> Self {
        Self::from_bits(0).with_en_crc(true)
    }

    pub fn as_rx(self) -> Self {
        self.with_power(true).with_prim_rx(true)
    }

    pub fn as_tx(self) -> Self {
        self.with_power(true).with_prim_rx(false)
    }
}

/// The radio's FIFO_STATUS register.
#[bitfield(u8, new = false, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    /// The last transmitted payload is flagged for reuse.
    #[bits(1, access = RO)]
    pub tx_reuse: bool,

    /// The TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,

    /// The TX FIFO is empty.
    #[bits(1, access = RO)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    /// The RX FIFO is full.
    #[bits(1, access = RO)]
    pub rx_full: bool,

    /// The RX FIFO is empty.
    #[bits(1, access = RO)]
    pub rx_empty: bool,
}
