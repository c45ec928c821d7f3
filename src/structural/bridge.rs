//! Structural Pattern: Bridge
//! Example: Remote controls and the devices they drive
//!
//! Run with: cargo run --bin bridge
//!
//! Two hierarchies that would otherwise multiply (every remote × every
//! device) are split apart. Remotes (the abstraction) talk to devices (the
//! implementation) only through the [`Device`] trait, so either side can grow
//! on its own: [`AdvancedRemoteControl`] works with a [`Tv`] and a [`Radio`]
//! without either knowing it exists.

use tracing::debug;

pub const MAX_VOLUME: u8 = 100;
const VOLUME_STEP: u8 = 10;

pub trait Device {
    fn name(&self) -> &'static str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    /// Values above [`MAX_VOLUME`] are clamped.
    fn set_volume(&mut self, percent: u8);
    fn channel(&self) -> u32;
    fn set_channel(&mut self, channel: u32);

    fn status(&self) -> String {
        format!(
            "{} is {}, volume {}%, channel {}",
            self.name(),
            if self.is_enabled() { "on" } else { "off" },
            self.volume(),
            self.channel()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tv {
    enabled: bool,
    volume: u8,
    channel: u32,
}

impl Device for Tv {
    fn name(&self) -> &'static str {
        "TV"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, percent: u8) {
        self.volume = percent.min(MAX_VOLUME);
    }

    fn channel(&self) -> u32 {
        self.channel
    }

    fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }
}

/// Radios start on a non-zero frequency slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
    enabled: bool,
    volume: u8,
    channel: u32,
}

impl Default for Radio {
    fn default() -> Self {
        Radio {
            enabled: false,
            volume: 30,
            channel: 1,
        }
    }
}

impl Device for Radio {
    fn name(&self) -> &'static str {
        "Radio"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, percent: u8) {
        self.volume = percent.min(MAX_VOLUME);
    }

    fn channel(&self) -> u32 {
        self.channel
    }

    fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

pub trait Remote {
    fn device(&self) -> &dyn Device;
    fn device_mut(&mut self) -> &mut dyn Device;

    fn toggle_power(&mut self) {
        let device = self.device_mut();
        if device.is_enabled() {
            device.disable();
        } else {
            device.enable();
        }
        debug!(device = device.name(), enabled = device.is_enabled(), "power toggled");
    }

    fn volume_up(&mut self) {
        let device = self.device_mut();
        device.set_volume(device.volume().saturating_add(VOLUME_STEP));
    }

    fn volume_down(&mut self) {
        let device = self.device_mut();
        device.set_volume(device.volume().saturating_sub(VOLUME_STEP));
    }

    fn channel_up(&mut self) {
        let device = self.device_mut();
        device.set_channel(device.channel().saturating_add(1));
    }

    fn channel_down(&mut self) {
        let device = self.device_mut();
        device.set_channel(device.channel().saturating_sub(1));
    }
}

#[derive(Debug)]
pub struct RemoteControl<D: Device> {
    device: D,
}

impl<D: Device> RemoteControl<D> {
    pub fn new(device: D) -> Self {
        RemoteControl { device }
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: Device> Remote for RemoteControl<D> {
    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn device_mut(&mut self) -> &mut dyn Device {
        &mut self.device
    }
}

/// Extends the abstraction; devices are untouched.
#[derive(Debug)]
pub struct AdvancedRemoteControl<D: Device> {
    device: D,
}

impl<D: Device> AdvancedRemoteControl<D> {
    pub fn new(device: D) -> Self {
        AdvancedRemoteControl { device }
    }

    pub fn mute(&mut self) {
        self.device.set_volume(0);
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: Device> Remote for AdvancedRemoteControl<D> {
    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn device_mut(&mut self) -> &mut dyn Device {
        &mut self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_power() {
        let mut remote = RemoteControl::new(Tv::default());
        remote.toggle_power();
        assert!(remote.device().is_enabled());
        remote.toggle_power();
        assert!(!remote.device().is_enabled());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut remote = RemoteControl::new(Tv::default());
        remote.volume_down();
        assert_eq!(remote.device().volume(), 0);

        for _ in 0..15 {
            remote.volume_up();
        }
        assert_eq!(remote.device().volume(), MAX_VOLUME);
    }

    #[test]
    fn test_channel_saturates_at_zero() {
        let mut remote = RemoteControl::new(Tv::default());
        remote.channel_down();
        assert_eq!(remote.device().channel(), 0);
        remote.channel_up();
        remote.channel_up();
        assert_eq!(remote.into_device().channel(), 2);
    }

    #[test]
    fn test_advanced_remote_mutes_radio() {
        let mut remote = AdvancedRemoteControl::new(Radio::default());
        remote.toggle_power();
        remote.volume_up();
        assert_eq!(remote.device().volume(), 40);

        remote.mute();
        assert_eq!(
            remote.device().status(),
            "Radio is on, volume 0%, channel 1"
        );
    }

    #[test]
    fn test_remotes_as_trait_objects() {
        let mut remotes: Vec<Box<dyn Remote>> = vec![
            Box::new(RemoteControl::new(Tv::default())),
            Box::new(AdvancedRemoteControl::new(Radio::default())),
        ];
        for remote in remotes.iter_mut() {
            remote.toggle_power();
        }
        assert!(remotes.iter().all(|r| r.device().is_enabled()));
    }
}
