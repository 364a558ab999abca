use super::bit_fields::Config;
use super::{mnemonics, registers, Radio};
use crate::error::Result;
use crate::link::{OutputUpdate, Transport};
use crate::types::RadioState;

impl<T: Transport> Radio<T> {
    /// Put the radio in receive mode.
    ///
    /// CE is dropped around the CONFIG write (the same choreography as
    /// address writes), then any stale tx_ds/tx_df events are cleared.
    pub fn as_rx(&mut self) -> Result<()> {
        self.state = RadioState::Rx;
        self.link.set_outputs(OutputUpdate::new().aux(false))?;
        self.config_register(registers::CONFIG, Config::base().as_rx().into_bits())?;
        self.link.set_outputs(OutputUpdate::new().aux(true))?;
        self.config_register(
            registers::STATUS,
            mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
        )
    }

    /// Put the radio in transmit mode.
    pub fn as_tx(&mut self) -> Result<()> {
        self.state = RadioState::Tx;
        self.config_register(registers::CONFIG, Config::base().as_tx().into_bits())
    }

    /// Power the radio down (CE low, PWR_UP cleared).
    pub fn power_down(&mut self) -> Result<()> {
        self.state = RadioState::PowerDown;
        self.link.set_outputs(OutputUpdate::new().aux(false))?;
        self.config_register(registers::CONFIG, Config::base().into_bits())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use crate::test::mk_radio;
    use crate::{wire_test_expects, RadioConfig, RadioState};

    #[test]
    fn as_rx_sequence() {
        let (writes, reads) = wire_test_expects![
            // CE low
            ([0x41], [0x01]),
            // CONFIG <- EN_CRC | PWR_UP | PRIM_RX
            ([0x02, 0x11, 0x20, 0x0B, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
            // CE high
            ([0x43], [0x01]),
            // clear tx_ds/tx_df events
            ([0x02, 0x11, 0x27, 0x30, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.as_rx().unwrap();
        assert_eq!(radio.state(), RadioState::Rx);
        transport.done();
    }

    #[test]
    fn as_tx_sequence() {
        let (writes, reads) = wire_test_expects![
            // CONFIG <- EN_CRC | PWR_UP
            ([0x02, 0x11, 0x20, 0x0A, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.as_tx().unwrap();
        assert_eq!(radio.state(), RadioState::Tx);
        transport.done();
    }

    #[test]
    fn power_down_sequence() {
        let (writes, reads) = wire_test_expects![
            // CE low
            ([0x41], [0x01]),
            // CONFIG <- EN_CRC only
            ([0x02, 0x11, 0x20, 0x08, 0x03], [0x01, 0x01, 0x0E, 0x00, 0x01]),
        ];
        let (mut radio, transport) = mk_radio(&RadioConfig::default(), &writes, &reads);
        radio.power_down().unwrap();
        assert_eq!(radio.state(), RadioState::PowerDown);
        transport.done();
    }
}
