//! Point values for guesses. The running score itself belongs to the session layer.

/// Points awarded for a correct guess
pub const CORRECT_POINTS: i32 = 1;
/// Points applied for a wrong guess
pub const WRONG_PENALTY: i32 = -2;

pub fn points_for(correct: bool) -> i32 {
    if correct {
        CORRECT_POINTS
    } else {
        WRONG_PENALTY
    }
}

/// Score after `correct` right and `wrong` wrong guesses, saturating at the `i32` bounds
pub fn score_for(correct: u32, wrong: u32) -> i32 {
    let total = i64::from(correct) * i64::from(CORRECT_POINTS)
        + i64::from(wrong) * i64::from(WRONG_PENALTY);
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
