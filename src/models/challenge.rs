// SPDX-License-Identifier: MIT

//! Daily challenge catalog.

use serde::{Deserialize, Serialize};

/// A catalog-defined task with a base point value.
///
/// Read-only reference data from the core's perspective; a user can
/// complete a given challenge at most once per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique challenge ID (also used as document ID)
    pub challenge_id: String,
    pub name: String,
    pub description: String,
    /// Base point value before the streak bonus
    pub points: i64,
}

/// Default office-wellness challenge catalog, seeded when the collection
/// is empty.
pub fn default_catalog() -> Vec<Challenge> {
    let seed: [(&str, &str, i64); 31] = [
        ("Step Sprint", "Take 5,000 steps before lunch.", 30),
        (
            "Stairway to Success",
            "Use the stairs exclusively and hit 20 flights by the end of the day.",
            35,
        ),
        (
            "Deskercise Challenge",
            "Complete 10 desk-friendly exercises throughout the day.",
            25,
        ),
        (
            "Walk & Talk",
            "Take a 10-minute walking meeting instead of sitting.",
            20,
        ),
        (
            "Water Break Walks",
            "Take a 2-minute walking break every time you drink water.",
            15,
        ),
        (
            "Lunchtime Sweat",
            "Complete a 15-minute workout during lunch.",
            40,
        ),
        (
            "Standing Ovation",
            "Stand for at least 5 minutes every hour.",
            15,
        ),
        (
            "Push-up Power",
            "Complete 50 push-ups throughout the workday.",
            40,
        ),
        ("Squat It Out", "Do 10 squats every hour.", 30),
        (
            "Plank Challenge",
            "Accumulate 5 minutes of planking before the workday ends.",
            35,
        ),
        (
            "Calf Raise Count",
            "Hit 100 calf raises throughout the day.",
            25,
        ),
        (
            "Wall Sit Warrior",
            "Complete 5 minutes of wall sits throughout the day.",
            30,
        ),
        (
            "Chair Dips for Days",
            "Complete 50 chair dips before the day ends.",
            35,
        ),
        (
            "Jumping Jack Attack",
            "Do 20 jumping jacks every hour.",
            30,
        ),
        (
            "Tight Core Tuesday",
            "Engage your core by holding a 30-second stomach vacuum every hour.",
            20,
        ),
        (
            "Lunges All Day",
            "Do 5 lunges every time you get up from your chair.",
            25,
        ),
        (
            "Skipping Steps",
            "Skip every other step when taking the stairs.",
            15,
        ),
        (
            "Balance Breaks",
            "Stand on one foot for 30 seconds every time you check your phone.",
            15,
        ),
        (
            "Quick Cardio Burst",
            "Complete a 60-second cardio burst 3 times during the workday.",
            30,
        ),
        (
            "Stretch & Breathe",
            "Do a full-body stretch every 90 minutes.",
            15,
        ),
        ("Elevator Ban", "Take only the stairs all day.", 30),
        (
            "Desk to Door Dashes",
            "Walk outside for fresh air at least three times.",
            20,
        ),
        (
            "Seated Spine Stretch",
            "Perform a 30-second seated spinal twist every hour to relieve tension.",
            15,
        ),
        (
            "Deep Breathing Reset",
            "Pause for 60 seconds of deep breathing every two hours to refresh your mind.",
            10,
        ),
        (
            "Neck & Shoulder Release",
            "Roll your shoulders and stretch your neck for 1 minute every hour.",
            10,
        ),
        (
            "Mindful Walk",
            "Take a slow, mindful 5-minute walk during your break, focusing on each step.",
            20,
        ),
        (
            "Wrist & Hand Mobility",
            "Stretch your wrists and fingers for 30 seconds every 90 minutes to avoid stiffness.",
            10,
        ),
        (
            "Eye Relaxation",
            "Follow the 20-20-20 rule: every 20 minutes, look at something 20 feet away for 20 seconds.",
            10,
        ),
        (
            "Standing Hamstring Stretch",
            "Perform a standing hamstring stretch for 30 seconds on each leg twice a day.",
            15,
        ),
        (
            "Seated Forward Fold",
            "Bend forward in your chair, reaching for your toes, and hold for 30 seconds to improve flexibility.",
            15,
        ),
        (
            "Burst of Energy",
            "Perform 30 seconds of high-intensity cardio every hour to keep your heart rate up.",
            25,
        ),
    ];

    seed.into_iter()
        .map(|(name, description, points)| Challenge {
            challenge_id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            points,
        })
        .collect()
}
