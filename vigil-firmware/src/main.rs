//! Vigil - Ambient Light & Motion Status Firmware
//!
//! Main firmware binary for RP2040-based sensor panels. One physical
//! control loop, forever: sample the photoresistor and the PIR line,
//! drive the two indicator LEDs, and keep the 2x16 character display
//! current - rewriting a line only when something it shows has changed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use vigil_core::{CharDisplay, Readings, StatusPanel};
use vigil_drivers::{Adc10, Hd44780, Indicator, LdrSensor, PirSensor};
use vigil_hal_rp2040::{RpAdc, RpInput, RpOutput};

// Pin map (see the panel schematic):
//   GP16 LCD RS        GP14 light LED
//   GP17 LCD EN        GP15 motion LED
//   GP18-21 LCD D4-D7  GP22 PIR output
//   GP26 (ADC0) photoresistor divider

/// ADC channel wired to the photoresistor divider
const LIGHT_CHANNEL: u8 = 0;

/// Wait after peripheral bring-up before readings are trusted
const STABILIZE_MS: u64 = 200;

/// How long each splash screen stays up
const SPLASH_MS: u64 = 3000;

/// Polling cadence of the main loop (trailing delay per iteration)
const POLL_INTERVAL_MS: u64 = 200;

/// Main entry point - single task, no other work to yield to
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Vigil firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Display bus: RS, EN, D4-D7
    let mut lcd = Hd44780::new(
        RpOutput::new(Output::new(p.PIN_16, Level::Low)),
        RpOutput::new(Output::new(p.PIN_17, Level::Low)),
        RpOutput::new(Output::new(p.PIN_18, Level::Low)),
        RpOutput::new(Output::new(p.PIN_19, Level::Low)),
        RpOutput::new(Output::new(p.PIN_20, Level::Low)),
        RpOutput::new(Output::new(p.PIN_21, Level::Low)),
        Delay,
    );

    // Sensors
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let light_pin = Channel::new_pin(p.PIN_26, Pull::None);
    let mut light = LdrSensor::new(
        Adc10::new(RpAdc::new(adc, [light_pin]), Delay),
        LIGHT_CHANNEL,
    );
    let pir = PirSensor::new(RpInput::new(Input::new(p.PIN_22, Pull::Down)));

    // Indicators
    let mut light_led = Indicator::new_active_high(RpOutput::new(Output::new(p.PIN_14, Level::Low)));
    let mut motion_led = Indicator::new_active_high(RpOutput::new(Output::new(p.PIN_15, Level::Low)));

    lcd.init();
    Timer::after_millis(STABILIZE_MS).await;
    info!("Peripherals initialized");

    // Startup banner, then the calibration screen. No calibration actually
    // happens during the pause; the reference panel behaves the same way.
    show_banner(&mut lcd, "SMART LIGHTING", "& MOTION SYS");
    Timer::after_millis(SPLASH_MS).await;
    if let Err(e) = lcd.clear() {
        warn!("display clear failed: {}", e);
    }
    show_banner(&mut lcd, "CALIBRATING...", "PLEASE WAIT");
    Timer::after_millis(SPLASH_MS).await;

    // Known-zero state before the first polling cycle
    light_led.set_on(false);
    motion_led.set_on(false);
    let mut panel = StatusPanel::new();
    if let Err(e) = lcd.clear() {
        warn!("display clear failed: {}", e);
    }

    info!("Entering polling loop");

    loop {
        match light.read_percent() {
            Ok(light_pct) => {
                let readings = Readings {
                    light_pct,
                    motion: pir.motion_detected(),
                };

                match panel.refresh(&mut lcd, readings) {
                    Ok(indications) => {
                        light_led.set_on(indications.light_led);
                        motion_led.set_on(indications.motion_led);
                    }
                    Err(e) => {
                        // Never let a display fault into the control flow
                        warn!("display update failed: {}", e);
                    }
                }
            }
            Err(e) => {
                // Skip this cycle's update entirely, retry on the next one
                warn!("light conversion failed: {}", e);
            }
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Write a two-line banner starting at column 1 of each row
fn show_banner<D: CharDisplay>(display: &mut D, line1: &str, line2: &str) {
    let result = display
        .set_cursor(1, 1)
        .and_then(|()| display.write_str(line1))
        .and_then(|()| display.set_cursor(2, 1))
        .and_then(|()| display.write_str(line2));
    if let Err(e) = result {
        warn!("banner write failed: {}", e);
    }
}
