//! Bus Pirate wire protocol constants (bitbang entry + binary SPI mode).

/// The single ack byte every binary-mode command is answered with.
pub const ACK: u8 = 0x01;

/// Sent first to knock the Bus Pirate out of any prompt it may be stuck in:
/// `0x00` enters (or re-enters) bitbang mode, `0x0F` resets.
pub const RESET: [u8; 2] = [0x00, 0x0F];

/// Number of line terminators sent to unwind nested menus before `#`.
pub const MENU_UNWIND_COUNT: usize = 10;

/// The terminal reset command, valid at the top-level prompt.
pub const MENU_RESET: u8 = b'#';

/// Number of `0x00` bytes needed to guarantee bitbang-mode entry.
pub const BITBANG_ENTRY_COUNT: usize = 20;

/// Switches from raw bitbang mode into binary SPI mode.
pub const ENTER_SPI_MODE: u8 = 0x01;

/// The trailing marker acknowledging binary SPI mode.
pub const SPI_MODE_MARKER: &[u8; 4] = b"SPI1";

/// Settle time between handshake stages; the Bus Pirate needs the pause to
/// re-enter bitbang mode.
pub const HANDSHAKE_SETTLE_MS: u64 = 100;

/// Drive chip-select low (asserted).
pub const CMD_CS_LOW: u8 = 0x02;

/// Drive chip-select high (deasserted).
pub const CMD_CS_HIGH: u8 = 0x03;

/// Bulk SPI transfer; OR with `len - 1` for 1..=16 data bytes.
pub const CMD_BULK_TRANSFER: u8 = 0x10;

/// The most data bytes one bulk transfer command can carry.
pub const BULK_TRANSFER_MAX: usize = 16;

/// Configure peripheral lines; OR with `power<<3 | pullup<<2 | aux<<1 | cs`.
pub const CMD_SET_OUTPUTS: u8 = 0x40;

/// Configure the SPI bus; OR with `power<<3 | ckp<<2 | cke<<1 | smp`.
pub const CMD_SET_SPI_CONFIG: u8 = 0x80;
