//! Segmeter - TM1637 Voltmeter Firmware
//!
//! Samples one ADC input on a fixed tick schedule and shows the result in
//! millivolts (or volts, with a decimal point) on a 4-digit TM1637 module.
//! A counter mode shows an incrementing count instead.
//!
//! Pinout (Raspberry Pi Pico):
//! - GPIO2: TM1637 CLK
//! - GPIO3: TM1637 DIO
//! - GPIO25: status LED
//! - GPIO26..29: ADC0..ADC3

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Flex, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use segmeter_core::config::MeterMode;
use segmeter_drivers::meter::{Meter, MeterError};
use segmeter_drivers::status_led::StatusLed;
use segmeter_drivers::tm1637::{Tm1637Bus, Tm1637Display};
use segmeter_hal_rp2040::{AdcInput, BlockingAdcChannel, FlexLine, LedOutput};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Segmeter firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    info!(
        "Mode {}, sample every {} ms, reference {} mV",
        config.sampler.mode,
        config.sampler.sample_period_ms(),
        config.sampler.adc_reference.millivolts()
    );

    // Display bus: both lines open-drain via direction switching
    let clk = FlexLine::new(Flex::new(p.PIN_2));
    let dio = FlexLine::new(Flex::new(p.PIN_3));
    let bus = Tm1637Bus::new(clk, dio, Delay);
    let display = Tm1637Display::new(bus, config.display);

    let led = StatusLed::new_active_high(LedOutput::new(Output::new(p.PIN_25, Level::Low)));

    // Channel index was range-checked with the rest of the configuration
    let input = AdcInput::from_index(config.sampler.adc_channel).unwrap_or(AdcInput::Adc0);
    let channel = match input {
        AdcInput::Adc0 => Channel::new_pin(p.PIN_26, Pull::None),
        AdcInput::Adc1 => Channel::new_pin(p.PIN_27, Pull::None),
        AdcInput::Adc2 => Channel::new_pin(p.PIN_28, Pull::None),
        AdcInput::Adc3 => Channel::new_pin(p.PIN_29, Pull::None),
    };
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let adc = BlockingAdcChannel::new(adc, channel);
    if config.sampler.mode == MeterMode::Voltmeter {
        info!("ADC input on GPIO{}", input.gpio());
    }

    let mut meter = Meter::new(display, adc, led, &config.sampler);

    let status = meter.start();
    if !status.is_acknowledged() {
        warn!("Display not responding ({} of {} bytes unacknowledged)", status.missed_acks, status.sent);
    }

    spawner.spawn(tasks::tick_task(config.sampler.tick_ms)).unwrap();
    info!("Tick task spawned, meter running");

    loop {
        match meter.poll(tasks::TICK.take()) {
            Ok(Some(sample)) => {
                if sample.status.is_acknowledged() {
                    debug!("Sample {} (raw {})", sample.value, sample.raw);
                } else {
                    warn!(
                        "Sample {} shown with {} missed acks",
                        sample.value, sample.status.missed_acks
                    );
                }
            }
            Ok(None) => {}
            Err(MeterError::Adc(e)) => warn!("ADC read failed: {}, sample skipped", e),
        }

        // Let the tick task run
        yield_now().await;
    }
}
