use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.25;

/// A square wave generator fed to SDL's audio thread
struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a constant tone while the sound timer is running.
///
/// Without an audio device the machine runs silently.
pub struct Beeper {
    device: Option<AudioDevice<SquareWave>>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Self {
        let device = sdl
            .audio()
            .and_then(|audio| {
                let desired = AudioSpecDesired {
                    freq: Some(44_100),
                    channels: Some(1),
                    samples: None,
                };
                audio.open_playback(None, &desired, |spec| SquareWave {
                    phase_inc: TONE_HZ / spec.freq as f32,
                    phase: 0.0,
                    volume: VOLUME,
                })
            })
            .map_err(|e| log::warn!("no audio device, running silently: {}", e))
            .ok();
        Beeper {
            device,
            playing: false,
        }
    }

    pub fn set_tone(&mut self, on: bool) {
        if on == self.playing {
            return;
        }
        self.playing = on;
        if let Some(device) = &self.device {
            if on {
                device.resume();
            } else {
                device.pause();
            }
        }
    }
}
