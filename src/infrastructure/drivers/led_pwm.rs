use static_cell::StaticCell;

use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::LEDC;
use esp_hal::time::Rate;

use triglow_patterns::DutyOutput;

use crate::infrastructure::config;

// The LEDC channels keep a reference to their timer, so both the peripheral
// driver and the configured timer need a 'static home.
static PWM_LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
static PWM_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Rejected LEDC configuration at boot time.
///
/// There is no recovery path: a misconfigured PWM block produces no usable
/// output, so the entry point halts on any of these.
#[derive(Debug)]
pub enum PwmInitError {
    Timer(timer::Error),
    Channel(channel::Error),
    UnsupportedResolution(u8),
}

impl From<timer::Error> for PwmInitError {
    fn from(error: timer::Error) -> Self {
        PwmInitError::Timer(error)
    }
}

impl From<channel::Error> for PwmInitError {
    fn from(error: channel::Error) -> Self {
        PwmInitError::Channel(error)
    }
}

/// ESP-specific PWM driver using the LEDC peripheral
///
/// One low-speed timer is shared by every LED; each LED gets its own LEDC
/// channel, bound to its GPIO in index order and started at zero duty.
pub struct EspLedcDriver {
    channels: [channel::Channel<'static, LowSpeed>; config::LED_COUNT],
    max_duty: u16,
}

impl EspLedcDriver {
    /// Program the LEDC timer and bind one channel per LED pin.
    ///
    /// # Arguments
    /// * `ledc` - LEDC peripheral
    /// * `pins` - GPIO pins wired to the LEDs, in LED index order
    pub fn new<O0, O1, O2>(
        ledc: LEDC<'static>,
        (pin_0, pin_1, pin_2): (O0, O1, O2),
    ) -> Result<Self, PwmInitError>
    where
        O0: PeripheralOutput<'static>,
        O1: PeripheralOutput<'static>,
        O2: PeripheralOutput<'static>,
    {
        let ledc = PWM_LEDC.init(Ledc::new(ledc));
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc: &'static Ledc<'static> = ledc;

        let timer = PWM_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        timer.configure(timer::config::Config {
            duty: duty_resolution(config::PWM.duty_bits)?,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(config::PWM.frequency_hz),
        })?;
        let timer: &'static timer::Timer<'static, LowSpeed> = timer;

        let channels = [
            init_channel(ledc, timer, channel::Number::Channel0, pin_0)?,
            init_channel(ledc, timer, channel::Number::Channel1, pin_1)?,
            init_channel(ledc, timer, channel::Number::Channel2, pin_2)?,
        ];

        Ok(Self {
            channels,
            max_duty: config::PWM.max_duty(),
        })
    }
}

impl DutyOutput for EspLedcDriver {
    fn set_duty(&mut self, led: usize, duty: u16) {
        // Out-of-range duty is clamped; the register write is the commit
        let duty = duty.min(self.max_duty);
        self.channels[led].set_duty_hw(u32::from(duty));
    }
}

fn init_channel<O>(
    ledc: &'static Ledc<'static>,
    timer: &'static timer::Timer<'static, LowSpeed>,
    number: channel::Number,
    pin: O,
) -> Result<channel::Channel<'static, LowSpeed>, PwmInitError>
where
    O: PeripheralOutput<'static>,
{
    let mut led_channel = ledc.channel(number, pin);
    led_channel.configure(channel::config::Config {
        timer,
        duty_pct: 0,
        pin_config: channel::config::PinConfig::PushPull,
    })?;
    Ok(led_channel)
}

fn duty_resolution(bits: u8) -> Result<timer::config::Duty, PwmInitError> {
    match bits {
        1 => Ok(timer::config::Duty::Duty1Bit),
        2 => Ok(timer::config::Duty::Duty2Bit),
        3 => Ok(timer::config::Duty::Duty3Bit),
        4 => Ok(timer::config::Duty::Duty4Bit),
        5 => Ok(timer::config::Duty::Duty5Bit),
        6 => Ok(timer::config::Duty::Duty6Bit),
        7 => Ok(timer::config::Duty::Duty7Bit),
        8 => Ok(timer::config::Duty::Duty8Bit),
        9 => Ok(timer::config::Duty::Duty9Bit),
        10 => Ok(timer::config::Duty::Duty10Bit),
        11 => Ok(timer::config::Duty::Duty11Bit),
        12 => Ok(timer::config::Duty::Duty12Bit),
        13 => Ok(timer::config::Duty::Duty13Bit),
        14 => Ok(timer::config::Duty::Duty14Bit),
        _ => Err(PwmInitError::UnsupportedResolution(bits)),
    }
}
