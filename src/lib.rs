#![doc = include_str!("../README.md")]
//!
//! ## Link API
//!
//! - [`SpiLink::open()`](link/struct.SpiLink.html#method.open)
//! - [`SpiLink::set_outputs()`](link/struct.SpiLink.html#method.set_outputs)
//! - [`SpiLink::set_spi_config()`](link/struct.SpiLink.html#method.set_spi_config)
//! - [`SpiLink::transfer()`](link/struct.SpiLink.html#method.transfer)
//! - [`SpiLink::cs_transfer()`](link/struct.SpiLink.html#method.cs_transfer)
//! - [`SpiLink::close()`](link/struct.SpiLink.html#method.close)
//!
//! ## Radio API
//!
//! - [`Radio::new()`](radio/struct.Radio.html#method.new)
//! - [`Radio::open()`](radio/struct.Radio.html#method.open)
//! - [`Radio::set_bus_power()`](radio/struct.Radio.html#method.set_bus_power)
//! - [`Radio::open_rx_pipe()`](radio/struct.Radio.html#method.open_rx_pipe)
//! - [`Radio::open_tx_pipe()`](radio/struct.Radio.html#method.open_tx_pipe)
//! - [`Radio::init()`](radio/struct.Radio.html#method.init)
//! - [`Radio::available()`](radio/struct.Radio.html#method.available)
//! - [`Radio::read()`](radio/struct.Radio.html#method.read)
//! - [`Radio::send()`](radio/struct.Radio.html#method.send)
//! - [`Radio::is_sending()`](radio/struct.Radio.html#method.is_sending)
//! - [`Radio::as_rx()`](radio/struct.Radio.html#method.as_rx)
//! - [`Radio::as_tx()`](radio/struct.Radio.html#method.as_tx)
//! - [`Radio::power_down()`](radio/struct.Radio.html#method.power_down)

mod error;
pub mod link;
pub mod radio;
mod types;

pub use error::{Error, Result};
pub use link::{OutputUpdate, SpiLink};
pub use radio::{Radio, RadioConfig};
pub use types::{RadioState, StatusFlags};
