// ABOUTME: Boolean behavior flags projected from the dimensions
// ABOUTME: Each flag reads one or two dimension fields and never another flag

use attune_types::{AccessibilityDimensions, BehavioralFlags, MotionPreference};

pub fn behavioral_flags(dims: &AccessibilityDimensions) -> BehavioralFlags {
    let motion = &dims.motion_animation;
    let focus = &dims.focus_navigation_input;
    let cognitive = &dims.cognitive;
    let sensory = &dims.sensory_sensitivity;
    let situational = &dims.situational_environmental;

    BehavioralFlags {
        disable_animations: motion.motion_preference == MotionPreference::None,
        disable_transitions: motion.instant_transitions,
        disable_parallax: motion.disable_parallax,
        disable_auto_play: motion.disable_auto_play,

        keyboard_first_mode: focus.keyboard_first_navigation,
        screen_reader_mode: focus.screen_reader_optimized,
        switch_navigation_mode: focus.switch_navigation,
        always_show_skip_links: focus.always_visible_skip_links,

        simple_language: cognitive.simple_language_mode,
        no_jargon: cognitive.no_jargon_mode,
        explicit_labels: cognitive.explicit_state_labels,
        confirm_destructive: cognitive.confirm_destructive_actions,
        show_progress: cognitive.always_show_progress,

        disable_flashing: sensory.disable_flashing,
        calm_mode: sensory.calm_idle_states || sensory.low_stimulation_mode,
        one_alert_at_a_time: sensory.disable_alert_stacking,
        quiet_mode: situational.quiet_mode,

        emergency_mode: situational.emergency_mode,
        privacy_mode: situational.public_space_privacy,
        low_bandwidth: situational.low_bandwidth_mode,
        battery_saver: situational.battery_saver_mode,
    }
}
