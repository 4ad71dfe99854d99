//! Audio direction
//!
//! The host plays the actual sounds; this module decides what each of the
//! four channels should do when the simulation reports an event.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Independent audio channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Jump cue
    Jump,
    /// Failure loop after a crash
    Failure,
    /// Background music while playing
    Ambient,
    /// Victory loop once the goal shows up
    Victory,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Jump,
        Channel::Failure,
        Channel::Ambient,
        Channel::Victory,
    ];

    /// Volume before player settings are applied
    fn base_volume(&self) -> f32 {
        match self {
            Channel::Jump => 0.75,
            Channel::Failure | Channel::Ambient | Channel::Victory => 1.0,
        }
    }

    fn loops(&self) -> bool {
        !matches!(self, Channel::Jump)
    }
}

/// A single instruction for the host's audio layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    Play(Channel),
    Pause(Channel),
    /// Seek to the start
    Rewind(Channel),
    SetLoop(Channel, bool),
    SetVolume(Channel, f32),
}

/// Host audio collaborator
pub trait AudioSink {
    fn apply(&mut self, command: AudioCommand);
}

/// Sink that only logs (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn apply(&mut self, command: AudioCommand) {
        log::debug!("audio: {:?}", command);
    }
}

/// Sink that keeps every command
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<AudioCommand>,
}

impl AudioSink for RecordingSink {
    fn apply(&mut self, command: AudioCommand) {
        self.commands.push(command);
    }
}

/// Maps game events to channel commands
#[derive(Debug, Clone, Default)]
pub struct AudioDirector {
    settings: Settings,
}

impl AudioDirector {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set loop flags and volumes on every channel
    pub fn configure(&self, sink: &mut impl AudioSink) {
        for channel in Channel::ALL {
            sink.apply(AudioCommand::SetLoop(channel, channel.loops()));
            sink.apply(AudioCommand::SetVolume(channel, self.volume(channel)));
        }
    }

    /// Replace settings and push the new volumes
    pub fn update_settings(&mut self, settings: Settings, sink: &mut impl AudioSink) {
        self.settings = settings;
        for channel in Channel::ALL {
            sink.apply(AudioCommand::SetVolume(channel, self.volume(channel)));
        }
    }

    fn volume(&self, channel: Channel) -> f32 {
        let scale = match channel {
            Channel::Jump => self.settings.effective_sfx(),
            _ => self.settings.effective_music(),
        };
        channel.base_volume() * scale
    }

    pub fn handle(&self, event: GameEvent, sink: &mut impl AudioSink) {
        use AudioCommand::*;

        match event {
            GameEvent::Started => {
                sink.apply(Pause(Channel::Failure));
                sink.apply(Rewind(Channel::Failure));
                sink.apply(Play(Channel::Ambient));
            }
            GameEvent::Jumped => {
                sink.apply(Rewind(Channel::Jump));
                sink.apply(Play(Channel::Jump));
            }
            GameEvent::Crashed => {
                sink.apply(Rewind(Channel::Failure));
                sink.apply(Play(Channel::Failure));
                sink.apply(Pause(Channel::Ambient));
                sink.apply(Pause(Channel::Victory));
            }
            GameEvent::GoalActivated | GameEvent::Won => {
                sink.apply(Pause(Channel::Ambient));
                sink.apply(SetLoop(Channel::Victory, true));
                sink.apply(Play(Channel::Victory));
            }
            GameEvent::Restarted => {
                for channel in Channel::ALL {
                    sink.apply(Pause(channel));
                    sink.apply(Rewind(channel));
                }
            }
            GameEvent::HazardPassed { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_loops_and_volumes() {
        let director = AudioDirector::new(Settings {
            master_volume: 0.5,
            ..Settings::default()
        });
        let mut sink = RecordingSink::default();
        director.configure(&mut sink);

        assert!(sink.commands.contains(&AudioCommand::SetLoop(Channel::Jump, false)));
        assert!(sink.commands.contains(&AudioCommand::SetLoop(Channel::Failure, true)));
        assert!(sink.commands.contains(&AudioCommand::SetVolume(Channel::Jump, 0.375)));
        assert!(sink.commands.contains(&AudioCommand::SetVolume(Channel::Ambient, 0.5)));
    }

    #[test]
    fn test_jump_rewinds_before_playing() {
        let director = AudioDirector::default();
        let mut sink = RecordingSink::default();
        director.handle(GameEvent::Jumped, &mut sink);
        assert_eq!(
            sink.commands,
            vec![
                AudioCommand::Rewind(Channel::Jump),
                AudioCommand::Play(Channel::Jump)
            ]
        );
    }

    #[test]
    fn test_goal_swaps_ambient_for_victory() {
        let director = AudioDirector::default();
        let mut sink = RecordingSink::default();
        director.handle(GameEvent::GoalActivated, &mut sink);
        assert!(sink.commands.contains(&AudioCommand::Pause(Channel::Ambient)));
        assert!(sink.commands.contains(&AudioCommand::Play(Channel::Victory)));
    }

    #[test]
    fn test_restart_silences_everything() {
        let director = AudioDirector::default();
        let mut sink = RecordingSink::default();
        director.handle(GameEvent::Restarted, &mut sink);
        for channel in Channel::ALL {
            assert!(sink.commands.contains(&AudioCommand::Pause(channel)));
            assert!(sink.commands.contains(&AudioCommand::Rewind(channel)));
        }
        assert!(!sink.commands.iter().any(|c| matches!(c, AudioCommand::Play(_))));
    }

    #[test]
    fn test_muted_settings_zero_volume() {
        let mut director = AudioDirector::default();
        let mut sink = RecordingSink::default();
        director.update_settings(
            Settings {
                muted: true,
                ..Settings::default()
            },
            &mut sink,
        );
        assert!(
            sink.commands
                .iter()
                .all(|c| matches!(c, AudioCommand::SetVolume(_, v) if *v == 0.0))
        );
    }
}
