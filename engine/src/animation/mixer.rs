//! Animation Mixer
//!
//! A minimal blend-weight scheduler for named clips: cross-fades between
//! clips over a fade window, loops or clamps each clip according to its
//! spec, and raises a polled just-finished signal when a one-shot clip
//! plays out. Sampling the skinned pose from clip time is the renderer's
//! job; this module only owns playback state.

use std::collections::HashMap;

use crate::locomotion::AnimationState;

/// Playback parameters for one clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    /// Clip length in seconds.
    pub duration: f32,
    /// Looping clips wrap; one-shot clips clamp at their final frame and
    /// raise the finished signal once.
    pub looping: bool,
}

impl ClipSpec {
    /// A repeating clip (idle, walk, run cycles).
    pub fn looping(duration: f32) -> Self {
        Self {
            duration,
            looping: true,
        }
    }

    /// A play-once clip that holds its final pose (jumps).
    pub fn one_shot(duration: f32) -> Self {
        Self {
            duration,
            looping: false,
        }
    }
}

/// Linear weight ramp toward a target over a fade window.
#[derive(Debug, Clone, Copy)]
struct Fade {
    target: f32,
    /// Weight change per second.
    rate: f32,
}

/// Per-clip playback state.
#[derive(Debug, Clone)]
struct Action {
    spec: ClipSpec,
    time: f32,
    weight: f32,
    fade: Option<Fade>,
    playing: bool,
    finished: bool,
}

impl Action {
    fn new(spec: ClipSpec) -> Self {
        Self {
            spec,
            time: 0.0,
            weight: 0.0,
            fade: None,
            playing: false,
            finished: false,
        }
    }
}

/// Blend-weight scheduler over the registered clip set.
///
/// States without a registered clip are tolerated everywhere: playing or
/// fading an unbound state is a no-op, so an incomplete clip set degrades
/// to skipped transitions rather than failures.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    actions: HashMap<AnimationState, Action>,
    just_finished: Vec<AnimationState>,
}

impl AnimationMixer {
    /// Create a mixer with no clips registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mixer from `(state, spec)` pairs.
    pub fn with_clips(clips: impl IntoIterator<Item = (AnimationState, ClipSpec)>) -> Self {
        let mut mixer = Self::new();
        for (state, spec) in clips {
            mixer.register(state, spec);
        }
        mixer
    }

    /// Register the clip backing a state. Re-registering replaces the
    /// previous spec and resets playback state.
    pub fn register(&mut self, state: AnimationState, spec: ClipSpec) {
        self.actions.insert(state, Action::new(spec));
    }

    /// Whether a clip is bound for this state.
    pub fn has_clip(&self, state: AnimationState) -> bool {
        self.actions.contains_key(&state)
    }

    /// Current blend weight of a state's clip (0.0 when unbound).
    pub fn weight(&self, state: AnimationState) -> f32 {
        self.actions.get(&state).map_or(0.0, |a| a.weight)
    }

    /// Current playback time of a state's clip in seconds.
    pub fn clip_time(&self, state: AnimationState) -> f32 {
        self.actions.get(&state).map_or(0.0, |a| a.time)
    }

    /// Whether a state's clip is currently contributing to the pose.
    pub fn is_playing(&self, state: AnimationState) -> bool {
        self.actions.get(&state).is_some_and(|a| a.playing)
    }

    /// Start a clip at full weight with no fade. Used for the initial pose.
    pub fn play(&mut self, state: AnimationState) {
        let Some(action) = self.actions.get_mut(&state) else {
            log::warn!("[AnimationMixer] No clip bound for {state:?}, play skipped");
            return;
        };
        action.time = 0.0;
        action.weight = 1.0;
        action.fade = None;
        action.playing = true;
        action.finished = false;
    }

    /// Cross-fade from one clip to another over `duration` seconds.
    ///
    /// The outgoing clip ramps to zero weight and stops; the incoming clip
    /// restarts from its first frame and ramps to full weight. Either side
    /// being unbound simply skips that half of the fade.
    pub fn cross_fade(&mut self, from: AnimationState, to: AnimationState, duration: f32) {
        if from != to {
            self.fade_out(from, duration);
        }
        self.fade_in(to, duration);
    }

    /// Ramp a clip's weight to zero over `duration` seconds.
    pub fn fade_out(&mut self, state: AnimationState, duration: f32) {
        if let Some(action) = self.actions.get_mut(&state) {
            if action.playing {
                action.fade = Some(Fade {
                    target: 0.0,
                    rate: fade_rate(action.weight, duration),
                });
            }
        }
    }

    /// Restart a clip from its first frame and ramp it to full weight over
    /// `duration` seconds.
    pub fn fade_in(&mut self, state: AnimationState, duration: f32) {
        let Some(action) = self.actions.get_mut(&state) else {
            log::warn!("[AnimationMixer] No clip bound for {state:?}, fade-in skipped");
            return;
        };
        action.time = 0.0;
        action.finished = false;
        action.playing = true;
        action.fade = Some(Fade {
            target: 1.0,
            rate: fade_rate(1.0 - action.weight, duration),
        });
    }

    /// Advance every playing clip by `dt` seconds.
    ///
    /// One-shot clips that reach their end clamp at the final frame and are
    /// recorded for [`take_just_finished`](Self::take_just_finished).
    pub fn update(&mut self, dt: f32) {
        for (state, action) in self.actions.iter_mut() {
            if !action.playing {
                continue;
            }

            if let Some(fade) = action.fade {
                let step = fade.rate * dt;
                if (action.weight - fade.target).abs() <= step {
                    action.weight = fade.target;
                    action.fade = None;
                    if action.weight <= 0.0 {
                        action.playing = false;
                        continue;
                    }
                } else if fade.target > action.weight {
                    action.weight += step;
                } else {
                    action.weight -= step;
                }
            }

            action.time += dt;
            if action.spec.looping {
                if action.spec.duration > 0.0 {
                    action.time %= action.spec.duration;
                }
            } else if action.time >= action.spec.duration {
                // Hold the final pose.
                action.time = action.spec.duration;
                if !action.finished {
                    action.finished = true;
                    self.just_finished.push(*state);
                }
            }
        }
    }

    /// Drain the clips that completed since the last call. Polled once per
    /// frame by the locomotion controller.
    pub fn take_just_finished(&mut self) -> Vec<AnimationState> {
        std::mem::take(&mut self.just_finished)
    }
}

/// Weight change per second that closes `distance` in `duration` seconds.
fn fade_rate(distance: f32, duration: f32) -> f32 {
    if duration > 0.0 {
        (distance / duration).abs().max(f32::EPSILON)
    } else {
        f32::INFINITY
    }
}
