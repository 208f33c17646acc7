//! Generate a synthetic CV corpus for load testing the scanner.
//!
//! Writes `<output>/<category>/<n>.txt` files filled with CV-shaped text:
//! a skills line, a few dated job entries, an education entry and filler
//! paragraphs with technology keywords sprinkled in.
//!
//! Usage:
//!     cargo run --release --bin generate-corpus [output_dir] [documents]
//!
//! Default output: ./synthetic-corpus with 2000 documents

use rand::Rng;
use std::env;
use std::path::PathBuf;

/// Documents generated when no count is given
const DEFAULT_DOCUMENTS: usize = 2_000;

/// Minimum filler size in bytes
const MIN_TEXT_SIZE: usize = 2_000;

/// Maximum filler size in bytes
const MAX_TEXT_SIZE: usize = 40_000;

const CATEGORIES: &[&str] = &[
    "ENGINEERING", "DATA", "DESIGN", "FINANCE", "HR", "MARKETING", "SALES", "HEALTHCARE",
];

const FIRST_NAMES: &[&str] = &[
    "Andi", "Budi", "Citra", "Dewi", "Eko", "Fitri", "Gilang", "Hana", "Indra", "Joko", "Kartika", "Lina",
];

const LAST_NAMES: &[&str] = &[
    "Pratama", "Santoso", "Lestari", "Anggraini", "Wijaya", "Handayani", "Ramadhan", "Saputra", "Kusuma",
];

/// Searchable keywords to sprinkle in
const SKILLS: &[&str] = &[
    "Java", "Python", "Rust", "Go", "SQL", "Kotlin", "Swift", "React", "Docker", "Kubernetes",
    "Terraform", "Spark", "Figma", "Excel", "Tableau", "Salesforce", "Recruiting", "Negotiation",
];

const POSITIONS: &[&str] = &[
    "Software Engineer", "Data Analyst", "Product Designer", "Accountant", "Recruiter",
    "Marketing Specialist", "Account Executive", "Nurse", "Project Manager",
];

const COMPANIES: &[&str] = &[
    "Tokopedia", "Gojek", "Traveloka", "Bukalapak", "Shopee", "Telkom Indonesia", "Blibli", "Xendit",
];

const INSTITUTIONS: &[&str] = &[
    "Universitas Indonesia", "Institut Teknologi Bandung", "Universitas Gadjah Mada",
    "Universitas Airlangga", "Universitas Brawijaya",
];

const DEGREES: &[&str] = &["Computer Science", "Statistics", "Management", "Psychology", "Visual Design"];

/// Filler words for paragraph text
const FILLER_WORDS: &[&str] = &[
    "led", "built", "delivered", "improved", "managed", "designed", "migrated", "reduced", "team",
    "project", "customers", "pipeline", "quarterly", "reports", "stakeholders", "process", "system",
    "launch", "analysis", "training", "platform", "growth", "budget", "operations", "quality",
];

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn generate_cv(rng: &mut impl Rng, target_size: usize) -> String {
    let mut text = format!(
        "{} {}\n{}\n\n",
        pick(rng, FIRST_NAMES),
        pick(rng, LAST_NAMES),
        pick(rng, POSITIONS)
    );

    let skill_count = rng.gen_range(3..=7);
    let skills: Vec<&str> = (0..skill_count).map(|_| pick(rng, SKILLS)).collect();
    text.push_str(&format!("Skills: {}\n\nExperience\n", skills.join(", ")));

    let mut year = rng.gen_range(2005..2018);
    for job in 0..rng.gen_range(1..=4) {
        let start = year;
        year += rng.gen_range(1..=4);
        let end = if job == 3 || year >= 2024 { "Present".to_string() } else { year.to_string() };
        text.push_str(&format!(
            "{} - {} {}\n{}\n",
            start,
            end,
            pick(rng, COMPANIES),
            pick(rng, POSITIONS)
        ));
        if end == "Present" {
            break;
        }
    }

    let graduated = rng.gen_range(2004..2020);
    text.push_str(&format!(
        "\nEducation\n{} - {}\n{}, {}\n\n",
        graduated - 4,
        graduated,
        pick(rng, INSTITUTIONS),
        pick(rng, DEGREES)
    ));

    // Fill with paragraphs, occasionally mentioning a skill
    while text.len() < target_size {
        let paragraph_len = rng.gen_range(30..=120);
        let mut words: Vec<&str> = (0..paragraph_len).map(|_| pick(rng, FILLER_WORDS)).collect();
        if rng.gen_bool(0.4) {
            let insert_pos = rng.gen_range(0..words.len());
            words.insert(insert_pos, pick(rng, SKILLS));
        }
        text.push_str(&words.join(" "));
        text.push_str(".\n\n");
    }
    text
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let output_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("synthetic-corpus"));
    let documents = match args.get(2) {
        Some(n) => n.parse().expect("Document count must be a positive integer"),
        None => DEFAULT_DOCUMENTS,
    };

    if output_dir.exists() {
        std::fs::remove_dir_all(&output_dir).expect("Failed to remove existing corpus");
    }

    println!("Generating synthetic CV corpus...");
    println!("Output: {}", output_dir.display());

    let mut rng = rand::thread_rng();
    let mut total_bytes = 0usize;
    for i in 0..documents {
        let category = CATEGORIES[i % CATEGORIES.len()];
        let dir = output_dir.join(category);
        std::fs::create_dir_all(&dir).expect("Failed to create category directory");

        let size = rng.gen_range(MIN_TEXT_SIZE..=MAX_TEXT_SIZE);
        let text = generate_cv(&mut rng, size);
        total_bytes += text.len();
        std::fs::write(dir.join(format!("{}.txt", 10_000 + i)), text).expect("Failed to write document");

        if (i + 1) % 500 == 0 {
            println!("  Wrote {}/{} documents", i + 1, documents);
        }
    }

    println!(
        "Done: {} documents in {} categories, {:.1} MB of text",
        documents,
        CATEGORIES.len().min(documents),
        total_bytes as f64 / 1_000_000.0
    );
}
