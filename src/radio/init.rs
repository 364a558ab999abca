use super::{registers, Radio};
use crate::error::Result;
use crate::link::Transport;

impl<T: Transport> Radio<T> {
    /// Apply the channel and payload configuration, then start listening.
    ///
    /// Call once after the addresses are set and before any send/receive.
    pub fn init(&mut self) -> Result<()> {
        self.config_register(registers::RF_CH, self.channel)?;

        // fixed payload length for both pipes
        self.config_register(registers::RX_PW_P0, self.payload_length)?;
        self.config_register(registers::RX_PW_P1, self.payload_length)?;

        self.as_rx()?;
        self.flush_rx()?;
        log::debug!(
            "radio initialized: channel {}, payload length {}",
            self.channel,
            self.payload_length
        );
        Ok(())
    }

    /// Tune to another RF channel (2400 + n MHz). Clamped to 0..=127.
    pub fn set_channel(&mut self, channel: u8) -> Result<()> {
        let channel = channel.min(127);
        self.config_register(registers::RF_CH, channel)?;
        self.channel = channel;
        Ok(())
    }

    /// Read the channel back from the chip.
    pub fn get_channel(&mut self) -> Result<u8> {
        let response = self.read_register(registers::RF_CH, 1)?;
        Ok(response[0])
    }

    /// Change the fixed payload length for pipes 0 and 1. Clamped to 1..=15.
    pub fn set_payload_length(&mut self, length: u8) -> Result<()> {
        let length = length.clamp(1, 15);
        self.config_register(registers::RX_PW_P0, length)?;
        self.config_register(registers::RX_PW_P1, length)?;
        self.payload_length = length;
        Ok(())
    }

    /// The configured fixed payload length.
    pub fn payload_length(&self) -> u8 {
        self.payload_length
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use crate::test::mk_radio;
    use crate::{wire_test_expects, RadioConfig, RadioState};

    #[test]
    fn init_sequence() {
        let (writes, reads) = wire_test_expects![
            // RF_CH <- 23
            ([0x02, 0x11, 0x25, 23, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            // RX_PW_P0 <- 15
            ([0x02, 0x11, 0x31, 15, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            // RX_PW_P1 <- 15
            ([0x02, 0x11, 0x32, 15, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            // as_rx(): CE low
            ([0x41], [0x01]),
            // CONFIG <- EN_CRC | PWR_UP | PRIM_RX
            ([0x02, 0x11, 0x20, 0x0B, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            // CE high
            ([0x43], [0x01]),
            // clear tx_ds/tx_df events
            ([0x02, 0x11, 0x27, 0x30, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            // flush_rx()
            ([0x02, 0x10, 0xE2, 0x03], [0x01, 0x01, 0x0E, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.init().unwrap();
        assert_eq!(radio.state(), RadioState::Rx);
        transport.done();
    }

    #[test]
    fn set_channel_clamps() {
        let (writes, reads) = wire_test_expects![
            // RF_CH <- 127
            ([0x02, 0x11, 0x25, 127, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.set_channel(0xFF).unwrap();
        transport.done();
    }

    #[test]
    fn get_channel() {
        let (writes, reads) = wire_test_expects![
            ([0x02, 0x11, 0x05, 0x00, 0x03], [0x01, 0x01, 0x0E, 76, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        assert_eq!(radio.get_channel().unwrap(), 76);
        transport.done();
    }

    #[test]
    fn set_payload_length() {
        let (writes, reads) = wire_test_expects![
            ([0x02, 0x11, 0x31, 8, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            ([0x02, 0x11, 0x32, 8, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.set_payload_length(8).unwrap();
        assert_eq!(radio.payload_length(), 8);
        transport.done();
    }
}
