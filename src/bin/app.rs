#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;

use triglow_esp::infrastructure::config;
use triglow_esp::infrastructure::drivers::{EspLedcDriver, hardware_seed};
use triglow_esp::infrastructure::tasks::led_pattern_task;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    println!("boot: triglow {}", config::FIRMWARE.version);

    // Bind the PWM channels; a rejected configuration is unrecoverable
    let driver = match EspLedcDriver::new(peripherals.LEDC, triglow_esp::led_gpios!(peripherals)) {
        Ok(driver) => driver,
        Err(e) => {
            println!("pwm: configuration rejected: {:?}", e);
            panic!("pwm init failed");
        }
    };
    println!(
        "pwm: {} channels ready at {} Hz, {}-bit duty",
        config::LED_COUNT,
        config::PWM.frequency_hz,
        config::PWM.duty_bits
    );

    // Seed the pattern engine and hand the driver to the scheduler task
    let seed = hardware_seed();
    spawner.spawn(led_pattern_task(driver, seed)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
