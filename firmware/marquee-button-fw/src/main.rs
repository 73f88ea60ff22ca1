//! Marquee Button Firmware
//!
//! Transmitter half of the marquee pair. Polls a push button and keys
//! the panel command over the UART link while it is held; two LEDs show
//! whether the board is sending or idle.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::UartTx;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::config::TxTimings;
use marquee_core::keyer::Keyer;
use marquee_hal::uart::UartConfig;
use marquee_hal_rp2040::link_config;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Marquee button firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Pin assignments are board-specific (GPIO2 button, GPIO3 sending
    // LED, GPIO4 idle LED). The button is wired active high.
    let button = Input::new(p.PIN_2, Pull::Down);
    let mut sending_led = Output::new(p.PIN_3, Level::Low);
    let mut idle_led = Output::new(p.PIN_4, Level::Low);

    // Serial link to the panel (GPIO0 TX). The panel validates parity
    // per frame, so both boards must run UartConfig::default().
    let link = UartConfig::default();
    let mut tx = UartTx::new_blocking(p.UART0, p.PIN_0, link_config(&link));
    info!("UART initialized at {} baud", link.baudrate);

    let keyer = Keyer::new();
    let timings = TxTimings::default();

    info!("Button loop running");
    loop {
        let step = keyer.sample(button.is_high());
        sending_led.set_level(step.sending_led.into());
        idle_led.set_level(step.idle_led.into());

        if let Some(command) = step.command {
            // The inter-byte gap also spaces the last byte from the
            // post-send wait, matching what the panel expects to see
            for &byte in command {
                tx.blocking_write(&[byte]).ok();
                Timer::after_millis(timings.inter_byte_ms as u64).await;
            }
            tx.blocking_flush().ok();
            debug!("command keyed");
            Timer::after_millis(timings.post_send_ms as u64).await;
        } else {
            Timer::after_millis(timings.idle_poll_ms as u64).await;
        }
    }
}
