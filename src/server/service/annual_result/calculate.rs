//! Annual result calculation from a registration's grades.
//!
//! Only the grade of the highest session counts for each course. The annual average
//! weights course averages by course coefficient; courses whose row is missing weigh 1.

use entity::sea_orm_active_enums::{BoardDecision, GradeValidationStatus, Honors};
use std::collections::HashMap;

use crate::server::model::{
    academic::GradeWithCourse,
    annual_result::{round2, CalculatedAnnualResult},
};

/// Lowest annual average admitted to the next year.
pub const PASS_MARK: f64 = 10.0;

/// Computes the annual result of `registration` from its grades.
pub fn calculate(
    registration: &entity::student_registration::Model,
    grades: &[GradeWithCourse],
) -> CalculatedAnnualResult {
    let mut final_grades: HashMap<i32, &GradeWithCourse> = HashMap::new();
    for grade in grades {
        final_grades
            .entry(grade.grade.course_id)
            .and_modify(|kept| {
                if (grade.grade.session, grade.grade.id) > (kept.grade.session, kept.grade.id) {
                    *kept = grade;
                }
            })
            .or_insert(grade);
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut credits_earned = 0;
    let mut graded_courses = 0;

    for grade in final_grades.values() {
        if let Some(average) = grade.grade.course_average {
            let weight = grade.course.as_ref().map_or(1.0, |c| c.course.coefficient);
            weighted_sum += average * weight;
            total_weight += weight;
            graded_courses += 1;
        }
        if grade.grade.validation_status == GradeValidationStatus::Validated {
            credits_earned += grade.grade.earned_credits;
        }
    }

    let annual_average = (total_weight > 0.0).then(|| round2(weighted_sum / total_weight));

    CalculatedAnnualResult {
        registration_id: registration.id,
        academic_year: registration.academic_year.clone(),
        annual_average,
        credits_earned,
        board_decision: annual_average.map(board_decision_for),
        honors: annual_average.and_then(honors_for),
        graded_courses,
    }
}

pub fn board_decision_for(average: f64) -> BoardDecision {
    if average >= PASS_MARK {
        BoardDecision::Admitted
    } else {
        BoardDecision::Repeat
    }
}

/// Honors earned with `average`, none below the pass mark.
pub fn honors_for(average: f64) -> Option<Honors> {
    match average {
        a if a >= 18.0 => Some(Honors::Excellent),
        a if a >= 16.0 => Some(Honors::VeryGood),
        a if a >= 14.0 => Some(Honors::Good),
        a if a >= 12.0 => Some(Honors::FairlyGood),
        a if a >= PASS_MARK => Some(Honors::Passable),
        _ => None,
    }
}
