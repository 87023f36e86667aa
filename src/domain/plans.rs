//! Fixed diet and workout tables keyed by category and preference.
//!
//! Lookups take the classifier's label rather than a `BmiCategory` so that a
//! model exporting an unexpected label degrades to an empty plan.

use crate::domain::model::{BmiCategory, DailyPlan, DietPreference, ExercisePreference};

pub fn diet_plan(category_label: &str, preference: DietPreference) -> DailyPlan {
    BmiCategory::from_label(category_label)
        .map(|category| diet_table(category, preference))
        .unwrap_or(DailyPlan::EMPTY)
}

pub fn workout_plan(category_label: &str, preference: ExercisePreference) -> DailyPlan {
    BmiCategory::from_label(category_label)
        .map(|category| workout_table(category, preference))
        .unwrap_or(DailyPlan::EMPTY)
}

pub fn diet_table(category: BmiCategory, preference: DietPreference) -> DailyPlan {
    use BmiCategory::*;
    use DietPreference::*;

    match (category, preference) {
        (Underweight, Vegetarian) => DailyPlan {
            morning: &["Oats with nuts and seeds + a glass of milk", "Sprouts salad + paneer cubes"],
            afternoon: &["Quinoa with mixed vegetables + lentil soup", "2 whole wheat rotis + dal + sabzi"],
            evening: &["Sweet potato salad + tofu", "Peanut butter sandwich + a banana"],
        },
        (Underweight, NonVegetarian) => DailyPlan {
            morning: &["Scrambled eggs with cheese + a glass of milk", "Chicken and vegetable omelet"],
            afternoon: &[
                "Grilled chicken breast with brown rice and steamed veggies",
                "Fish curry with whole wheat roti",
            ],
            evening: &["Turkey sandwich on whole wheat bread", "Chicken and bean soup"],
        },
        (Underweight, Vegan) => DailyPlan {
            morning: &[
                "Avocado toast on whole grain bread + a plant-based smoothie",
                "Oats with nut butter, berries, and chia seeds",
            ],
            afternoon: &[
                "Lentil soup with quinoa and roasted vegetables",
                "Tofu scramble with spinach and mushrooms",
            ],
            evening: &["Chickpea curry with brown rice", "Veggie burger with sweet potato fries"],
        },
        (NormalWeight, Vegetarian) => DailyPlan {
            morning: &[
                "Vegetable poha + a glass of skim milk",
                "Fruit salad with yogurt and a handful of almonds",
            ],
            afternoon: &["Dal tadka + brown rice + salad", "Multigrain roti + paneer sabzi + soup"],
            evening: &[
                "Stir-fried vegetables with tofu",
                "Lentil soup with a side of steamed vegetables",
            ],
        },
        (NormalWeight, NonVegetarian) => DailyPlan {
            morning: &["Boiled eggs + whole wheat toast", "Yogurt with berries and granola"],
            afternoon: &["Grilled fish with quinoa and green beans", "Chicken salad with light dressing"],
            evening: &[
                "Baked salmon with roasted asparagus and potatoes",
                "Lean steak with a large green salad",
            ],
        },
        (NormalWeight, Vegan) => DailyPlan {
            morning: &[
                "Spinach and mushroom smoothie + a piece of fruit",
                "Oatmeal with berries and a sprinkle of nuts",
            ],
            afternoon: &[
                "Black bean burger on a whole wheat bun",
                "Quinoa bowl with roasted veggies and a tahini dressing",
            ],
            evening: &[
                "Vegetable curry with a side of brown rice",
                "Stir-fried tofu with mixed vegetables",
            ],
        },
        (Overweight, Vegetarian) => DailyPlan {
            morning: &[
                "Green smoothie with spinach and a scoop of protein powder",
                "Oats with berries and seeds",
            ],
            afternoon: &[
                "Large vegetable salad with chickpeas and light dressing",
                "Sprouts salad + a cup of lentil soup",
            ],
            evening: &["Grilled paneer with bell peppers and onions", "Mixed vegetable stir-fry"],
        },
        (Overweight, NonVegetarian) => DailyPlan {
            morning: &[
                "Scrambled egg whites with spinach and mushrooms",
                "Greek yogurt with a handful of berries",
            ],
            afternoon: &[
                "Large chicken salad with a variety of greens and a light vinaigrette",
                "Tuna salad (made with Greek yogurt) on lettuce wraps",
            ],
            evening: &[
                "Baked cod with steamed broccoli and lemon",
                "Lean turkey stir-fry with a low-sodium sauce",
            ],
        },
        (Overweight, Vegan) => DailyPlan {
            morning: &[
                "Chia seed pudding made with almond milk and berries",
                "Tofu scramble with a side of fresh fruit",
            ],
            afternoon: &[
                "Lentil soup with a side of mixed greens",
                "Quinoa bowl with a variety of raw vegetables",
            ],
            evening: &[
                "Steamed edamame with a side of cauliflower rice",
                "Large green salad with grilled portobello mushrooms",
            ],
        },
        (Obese, Vegetarian) => DailyPlan {
            morning: &["High-fiber cereal with skim milk", "A large fruit bowl with a sprinkle of nuts"],
            afternoon: &[
                "Vegetable soup with a small salad",
                "Grilled vegetables with a small portion of brown rice",
            ],
            evening: &[
                "Cauliflower rice bowl with grilled tofu and a variety of low-carb vegetables",
                "A large green salad with grilled paneer",
            ],
        },
        (Obese, NonVegetarian) => DailyPlan {
            morning: &["Boiled egg whites + a small piece of fruit", "Low-fat Greek yogurt with berries"],
            afternoon: &[
                "Grilled chicken breast with steamed greens",
                "Tuna salad (no mayo) on a bed of lettuce",
            ],
            evening: &[
                "Baked fish with roasted vegetables",
                "Lean turkey or chicken breast with a large green salad",
            ],
        },
        (Obese, Vegan) => DailyPlan {
            morning: &[
                "Spinach and berry smoothie with plant-based protein powder",
                "A small bowl of oatmeal with a few berries",
            ],
            afternoon: &[
                "Large salad with kidney beans and a light dressing",
                "Broccoli and mushroom stir-fry",
            ],
            evening: &[
                "Steamed vegetables with a side of lentils",
                "Black bean soup with a side of mixed greens",
            ],
        },
    }
}

pub fn workout_table(category: BmiCategory, preference: ExercisePreference) -> DailyPlan {
    use BmiCategory::*;
    use ExercisePreference::*;

    match (category, preference) {
        (Underweight, Cardio) => DailyPlan {
            morning: &["20 min brisk walk", "15 min jogging"],
            afternoon: &["15 min cycling", "10 min swimming"],
            evening: &["15 min elliptical training", "10 min light cardio"],
        },
        (Underweight, StrengthTraining) => DailyPlan {
            morning: &["3 sets of 10 push-ups", "3 sets of 15 squats"],
            afternoon: &["3 sets of 12 bicep curls (light weights)", "3 sets of 10 lunges"],
            evening: &["3 sets of 10 pull-ups (assisted if needed)", "3 sets of 15 tricep dips"],
        },
        (Underweight, Yoga) => DailyPlan {
            morning: &["Warrior Pose Flow (Virabhadrasana)", "Sun Salutations"],
            afternoon: &["Chair Pose (Utkatasana) and Tree Pose (Vrksasana)"],
            evening: &["Restorative Yoga Poses (e.g., Supported Bridge Pose)"],
        },
        (NormalWeight, Cardio) => DailyPlan {
            morning: &["30 min running", "45 min cycling"],
            afternoon: &["30 min swimming", "20 min HIIT"],
            evening: &["30 min elliptical training", "45 min brisk walk"],
        },
        (NormalWeight, StrengthTraining) => DailyPlan {
            morning: &[
                "Full body workout (bench press, squats, deadlifts)",
                "Upper body workout (bicep curls, pull-ups)",
            ],
            afternoon: &["Lower body workout (lunges, leg press)", "Core workout (planks, crunches)"],
            evening: &["Circuit training with moderate weights", "3 sets of 15 kettlebell swings"],
        },
        (NormalWeight, Yoga) => DailyPlan {
            morning: &["Vinyasa Flow", "Power Yoga session"],
            afternoon: &["Ashtanga Yoga practice", "Balancing poses (e.g., Crow Pose)"],
            evening: &["Hatha Yoga session", "Stretching and flexibility poses"],
        },
        (Overweight, Cardio) => DailyPlan {
            morning: &["45 min brisk walk", "30 min stationary bike"],
            afternoon: &["30 min elliptical training", "45 min swimming"],
            evening: &["45 min jogging or power walking", "30 min stair climbing machine"],
        },
        (Overweight, StrengthTraining) => DailyPlan {
            morning: &["3 sets of 15 bodyweight squats", "3 sets of 10 push-ups (on knees if needed)"],
            afternoon: &["3 sets of 20 lunges", "3 sets of 12 rows with resistance bands"],
            evening: &[
                "Circuit training with light weights and high reps",
                "Bodyweight exercises (planks, glute bridges)",
            ],
        },
        (Overweight, Yoga) => DailyPlan {
            morning: &["Beginner-friendly Vinyasa flow", "Gentle Yoga for Flexibility"],
            afternoon: &["Chair Yoga for stability and balance", "Restorative Yoga with props"],
            evening: &["Slow-paced Hatha Yoga", "Stretching routine for hips and back"],
        },
        (Obese, Cardio) => DailyPlan {
            morning: &["60 min brisk walking (low impact)", "45 min cycling (light resistance)"],
            afternoon: &["45 min swimming laps (gentle pace)", "30 min elliptical (low incline)"],
            evening: &["45 min walking on a treadmill", "20 min low-impact aerobics"],
        },
        (Obese, StrengthTraining) => DailyPlan {
            morning: &["Bodyweight squats (3 sets of 10)", "Wall push-ups (3 sets of 12)"],
            afternoon: &[
                "Seated resistance band rows (3 sets of 15)",
                "Chair-assisted lunges (3 sets of 10)",
            ],
            evening: &[
                "Planks (start with 20 seconds, gradually increase)",
                "Glute bridges (3 sets of 15)",
            ],
        },
        (Obese, Yoga) => DailyPlan {
            morning: &["Gentle stretching and mobility exercises", "Chair Yoga"],
            afternoon: &[
                "Yin Yoga for deep stretching",
                "Basic Yoga Poses (e.g., Mountain Pose, Cat-Cow Pose)",
            ],
            evening: &["Restorative Yoga to release tension", "Breathing exercises and meditation"],
        },
    }
}
