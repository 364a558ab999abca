use super::bit_fields::FifoStatus;
use super::{commands, mnemonics, registers, Radio};
use crate::error::Result;
use crate::link::Transport;

impl<T: Transport> Radio<T> {
    /// Is there a payload ready to [`read()`](Radio::read)?
    ///
    /// True when the "RX data ready" event is pending, or when the RX FIFO
    /// still holds payloads whose event was already cleared by an earlier
    /// read.
    pub fn available(&mut self) -> Result<bool> {
        if self.status()?.rx_dr() {
            return Ok(true);
        }
        Ok(!self.rx_fifo_empty()?)
    }

    /// Is the radio's RX FIFO empty?
    pub fn rx_fifo_empty(&mut self) -> Result<bool> {
        let response = self.read_register(registers::FIFO_STATUS, 1)?;
        Ok(FifoStatus::from_bits(response[0]).rx_empty())
    }

    /// Fetch the next received payload and clear the "RX data ready" event.
    ///
    /// Returns exactly [`payload_length`](Radio::payload_length) bytes. The
    /// chip clocks out whatever its FIFO holds; calling this without a prior
    /// [`available()`](Radio::available) check yields stale data.
    pub fn read(&mut self) -> Result<Vec<u8>> {
        let mut payload = self
            .link
            .cs_transfer(&[commands::R_RX_PAYLOAD], self.payload_length as usize + 1)?;
        payload.remove(0);
        self.config_register(registers::STATUS, mnemonics::MASK_RX_DR)?;
        Ok(payload)
    }

    /// Discard everything in the radio's RX FIFO.
    pub fn flush_rx(&mut self) -> Result<()> {
        self.command(commands::FLUSH_RX)
    }

    /// Discard everything in the radio's TX FIFO.
    pub fn flush_tx(&mut self) -> Result<()> {
        self.command(commands::FLUSH_TX)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use crate::test::mk_radio;
    use crate::{wire_test_expects, RadioConfig};

    #[test]
    fn available_on_rx_dr() {
        let (writes, reads) = wire_test_expects![
            // STATUS with RX_DR set
            ([0x02, 0x11, 0x07, 0x00, 0x03], [0x01, 0x01, 0x0E, 0x40, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        assert!(radio.available().unwrap());
        transport.done();
    }

    #[test]
    fn available_on_occupied_fifo() {
        let (writes, reads) = wire_test_expects![
            // STATUS without RX_DR
            ([0x02, 0x11, 0x07, 0x00, 0x03], [0x01, 0x01, 0x0E, 0x0E, 0x01]),
            // FIFO_STATUS with RX_EMPTY clear
            ([0x02, 0x11, 0x17, 0x00, 0x03], [0x01, 0x01, 0x0E, 0x10, 0x01]),
            // again, with an empty RX FIFO
            ([0x02, 0x11, 0x07, 0x00, 0x03], [0x01, 0x01, 0x0E, 0x0E, 0x01]),
            ([0x02, 0x11, 0x17, 0x00, 0x03], [0x01, 0x01, 0x0E, 0x11, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        assert!(radio.available().unwrap());
        assert!(!radio.available().unwrap());
        transport.done();
    }

    #[test]
    fn read_returns_payload_and_clears_event() {
        let mut frame = vec![0x02, 0x1F, 0x61];
        frame.extend_from_slice(&[0x00; 15]);
        frame.push(0x03);
        let mut response = vec![0x01, 0x01, 0x40];
        response.extend_from_slice(b"hello");
        response.extend_from_slice(&[0x00; 10]);
        response.push(0x01);
        let (writes, reads) = wire_test_expects![
            // R_RX_PAYLOAD, 16 bytes clocked
            (frame, response),
            // STATUS <- RX_DR to clear the event
            ([0x02, 0x11, 0x27, 0x40, 0x03], [0x01, 0x01, 0x40, 0x00, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        let payload = radio.read().unwrap();
        assert_eq!(payload.len(), 15);
        assert_eq!(&payload[..5], b"hello");
        transport.done();
    }

    #[test]
    fn flush() {
        let (writes, reads) = wire_test_expects![
            // FLUSH_RX
            ([0x02, 0x10, 0xE2, 0x03], [0x01, 0x01, 0x0E, 0x01]),
            // FLUSH_TX
            ([0x02, 0x10, 0xE1, 0x03], [0x01, 0x01, 0x0E, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        transport.done();
    }
}
