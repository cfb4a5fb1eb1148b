//! Static workout plans, one per goal.

use crate::database::Goal;

const LOSE_WEIGHT_PLAN: &str = "<b>Weight Loss Workout</b>
- 30 min brisk walk/jog
- 3 sets of 15 squats
- 3 sets of 10 push-ups (knees optional)
- 3 sets of 20 jumping jacks
- <a href=\"https://youtu.be/example\">Video Demo</a>";

const GAIN_MUSCLE_PLAN: &str = "<b>Muscle Building Workout</b>
- 5 sets of 8 barbell squats
- 4 sets of 10 bench presses
- 4 sets of 12 pull-ups
- 3 sets of 15 deadlifts
- <a href=\"https://youtu.be/example\">Video Demo</a>";

const STAY_FIT_PLAN: &str = "<b>Maintenance Workout</b>
- 20 min yoga/stretching
- 3 sets of 12 lunges
- 3 sets of 15 planks (30 sec hold)
- 2 sets of 20 mountain climbers
- <a href=\"https://youtu.be/example\">Video Demo</a>";

/// The plan for a goal (HTML).
pub fn plan_for(goal: Goal) -> &'static str {
    match goal {
        Goal::LoseWeight => LOSE_WEIGHT_PLAN,
        Goal::GainMuscle => GAIN_MUSCLE_PLAN,
        Goal::StayFit => STAY_FIT_PLAN,
    }
}
