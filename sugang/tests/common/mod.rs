// Helpers compartidos por los tests de integración
#![allow(dead_code)]

use sugang::algorithm::parse_class_time;
use sugang::models::Course;

pub fn course(id: &str, name: &str, credits: u32, class_time: &str) -> Course {
    Course {
        subject_id: id.to_string(),
        subject_korean_name: name.to_string(),
        subject_english_name: format!("{} (en)", name),
        credit_points: credits,
        recommended_year: String::new(),
        course_language: "Korean".to_string(),
        classroom: format!("R{}", id),
        main_lecturer_name: "김교수".to_string(),
        class_time: class_time.to_string(),
        class_time_processed: parse_class_time(class_time).expect("class_time válido en fixture"),
    }
}

/// Catálogo sintético determinista (LCG) con choques frecuentes.
pub fn synthetic_catalog(n: usize, seed: u64) -> Vec<Course> {
    const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    let mut state = seed;
    let mut next = move |modulo: u64| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) % modulo
    };

    (0..n)
        .map(|i| {
            let meetings = next(3) as usize;
            let mut parts = Vec::new();
            for _ in 0..meetings {
                let day = DAYS[next(5) as usize];
                let hour = 9 + next(8);
                let half = if next(2) == 0 { "" } else { ".5" };
                parts.push(format!("{} {}{}(B{})", day, hour, half, next(400)));
            }
            let credits = 1 + next(4) as u32;
            let mut c = course(&format!("C{:04}", i), &format!("과목{}", next(n as u64 / 2 + 1)), credits, &parts.join(" "));
            c.recommended_year = match next(6) {
                0 => "대학원".to_string(),
                1 => String::new(),
                k => format!("{}학년", k - 1),
            };
            c
        })
        .collect()
}
