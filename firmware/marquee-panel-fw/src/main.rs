//! Marquee Panel Firmware
//!
//! Receiver half of the marquee pair. Listens on the UART link for the
//! panel command and shows the EEPROM-stored message on a dual-module
//! HD44780 panel when it arrives. Whatever is on module one crawls
//! sideways on every pass through the main loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{self, InterruptHandler, UartRx};
use embassy_time::{with_timeout, Delay, Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use marquee_core::banner::{self, BOOT_BANNER};
use marquee_core::config::{LcdTimings, PanelTimings, StoreTimings};
use marquee_core::receiver::{Receiver, RxEvent};
use marquee_core::traits::{MessageStore, Module, Panel};
use marquee_drivers::{At24, Hd44780, ParallelBus, PayloadStore, STORED_MESSAGE};
use marquee_hal::uart::UartConfig;
use marquee_hal_rp2040::{link_config, RpOutputPin};

bind_interrupts!(struct Irqs {
    UART0_IRQ => InterruptHandler<UART0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Marquee panel firmware starting...");

    let p = embassy_rp::init(Default::default());

    let lcd_timings = LcdTimings::default();
    let panel_timings = PanelTimings::default();

    // LCD bus pin assignments are board-specific (GPIO8-15 data,
    // GPIO16 RS, GPIO17 R/W, GPIO18/19 module enables)
    let data = [
        RpOutputPin::new(Output::new(p.PIN_8, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_9, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_10, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_11, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_12, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_13, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_14, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_15, Level::Low)),
    ];
    let bus = ParallelBus::new(
        data,
        RpOutputPin::new(Output::new(p.PIN_16, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_17, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_18, Level::Low)),
        RpOutputPin::new(Output::new(p.PIN_19, Level::Low)),
        Delay,
        lcd_timings,
    );

    let mut panel = Hd44780::with_timings(bus, Delay, lcd_timings);
    panel.init(Module::One);
    panel.init(Module::Two);
    Timer::after_millis(5).await;
    info!("LCD modules initialized");

    // Serial link from the button board (GPIO1 RX). Both boards run
    // UartConfig::default(); the parity engine flags bad frames.
    let link = UartConfig::default();
    let mut rx = UartRx::new(p.UART0, p.PIN_1, Irqs, p.DMA_CH0, link_config(&link));
    info!("UART initialized at {} baud", link.baudrate);

    banner::play(&mut panel, &mut Delay, BOOT_BANNER);

    // Message store on the I2C EEPROM (GPIO20 SDA, GPIO21 SCL), seeded
    // with the fixed message on every boot
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());
    let eeprom = At24::new(i2c, Delay);
    let mut store = PayloadStore::with_timings(eeprom, Delay, StoreTimings::default());
    store.save(STORED_MESSAGE);
    info!("Stored message seeded");

    // Link status LED (GPIO22)
    let mut status_led = Output::new(p.PIN_22, Level::Low);

    let mut receiver = Receiver::new(panel_timings);
    let mut delay = Delay;
    let mut buf = [0u8; 1];
    let started = Instant::now();

    info!("Receive loop running");
    loop {
        status_led.set_level(receiver.lamp_level(started.elapsed().as_millis()).into());
        panel.shift_right(Module::One);

        let poll = Duration::from_millis(panel_timings.poll_ms as u64);
        match with_timeout(poll, rx.read(&mut buf)).await {
            Ok(Ok(())) => {
                receiver.on_event(RxEvent::Byte(buf[0]), &mut panel, &mut store, &mut delay);
            }
            Ok(Err(uart::Error::Parity)) => {
                receiver.on_event(RxEvent::ParityError, &mut panel, &mut store, &mut delay);
            }
            Ok(Err(e)) => warn!("UART read error: {:?}", e),
            // No byte this pass; the lamp and the crawl run again
            Err(_) => {}
        }
    }
}
