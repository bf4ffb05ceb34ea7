#![allow(dead_code)]

use myrtio_pwm_light::{
    ChannelOutput, Lamp, LampConfig, LightEvent, LightObserver, OutputSink, Topology,
};

/// A single call received by [`RecordingSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Duty(u8, u16),
    Digital(u8, bool),
    Phased(u8, u16, u16),
}

/// Output sink that keeps every write
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<Write>,
}

impl OutputSink for RecordingSink {
    fn write_duty(&mut self, channel: u8, duty: u16) {
        self.writes.push(Write::Duty(channel, duty));
    }

    fn write_digital(&mut self, channel: u8, on: bool) {
        self.writes.push(Write::Digital(channel, on));
    }

    fn write_phased_duty(&mut self, channel: u8, duty: u16, phase: u16) {
        self.writes.push(Write::Phased(channel, duty, phase));
    }
}

/// Observer that keeps every event
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<LightEvent>,
}

impl LightObserver for RecordingObserver {
    fn notify(&mut self, event: LightEvent) {
        self.events.push(event);
    }
}

pub type TestLamp = Lamp<RecordingSink, RecordingObserver>;

pub fn lamp(topology: Topology) -> TestLamp {
    lamp_with(topology, &LampConfig::default())
}

pub fn lamp_with(topology: Topology, config: &LampConfig) -> TestLamp {
    Lamp::new(
        topology,
        RecordingSink::default(),
        RecordingObserver::default(),
        config,
    )
}

/// Tick until a tick writes nothing, returns the number of ticks that wrote
pub fn settle(lamp: &mut TestLamp) -> usize {
    let mut changed = 0;
    loop {
        let before = lamp.sink().writes.len();
        lamp.tick();
        if lamp.sink().writes.len() == before {
            return changed;
        }
        changed += 1;
        assert!(changed < 10_000, "lamp never settled");
    }
}

/// Duties of the last written frame
pub fn duties(lamp: &TestLamp) -> Vec<u16> {
    lamp.duty_frame().iter().map(|output| output.duty()).collect()
}

pub fn outputs(lamp: &TestLamp) -> Vec<ChannelOutput> {
    lamp.duty_frame().iter().copied().collect()
}

pub fn take_events(lamp: &mut TestLamp) -> Vec<LightEvent> {
    std::mem::take(&mut lamp.observer_mut().events)
}
