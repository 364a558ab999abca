use std::time::Duration;

/// Session configuration for a [`Radio`](crate::radio::Radio).
///
/// Follows a builder pattern; start from [`RadioConfig::default`] and chain
/// the `with_*` setters:
/// ```
/// use nrf24bp::RadioConfig;
/// let config = RadioConfig::default().with_channel(42).with_payload_length(8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RadioConfig {
    channel: u8,
    payload_length: u8,
    send_timeout: Duration,
}

impl Default for RadioConfig {
    /// | field | default |
    /// |------:|:--------|
    /// | [`RadioConfig::channel()`] | `23` |
    /// | [`RadioConfig::payload_length()`] | `15` |
    /// | [`RadioConfig::send_timeout()`] | 1 second |
    fn default() -> Self {
        Self {
            channel: 23,
            payload_length: 15,
            send_timeout: Duration::from_secs(1),
        }
    }
}

impl RadioConfig {
    /// The RF channel (2400 + n MHz). Clamped to 0..=127.
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel.min(127);
        self
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// The fixed payload length used for pipes 0 and 1.
    ///
    /// Clamped to 1..=15: the Bus Pirate moves at most 16 bytes per bulk
    /// transfer and the payload instruction byte rides in the same frame.
    pub fn with_payload_length(mut self, length: u8) -> Self {
        self.payload_length = length.clamp(1, 15);
        self
    }

    pub fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// How long [`send()`](crate::radio::Radio::send) may wait for a pending
    /// transmission before giving up with
    /// [`Error::TxTimeout`](crate::Error::TxTimeout).
    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = timeout;
        self
    }

    pub fn send_timeout(&self) -> Duration {
        self.send_timeout
    }
}

#[cfg(test)]
mod test {
    use super::RadioConfig;

    #[test]
    fn clamps() {
        let config = RadioConfig::default()
            .with_channel(200)
            .with_payload_length(32);
        assert_eq!(config.channel(), 127);
        assert_eq!(config.payload_length(), 15);
        let config = config.with_payload_length(0);
        assert_eq!(config.payload_length(), 1);
    }

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.channel(), 23);
        assert_eq!(config.payload_length(), 15);
    }
}
