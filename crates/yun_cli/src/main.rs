use std::fmt::Display;

use chrono::{Local, Timelike};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yun_base::{
    Animal, PalaceAssignment, PalaceReading, Pillar, Purpose, Star, ZodiacCompatibility,
    ZodiacSign, calculate_palaces, find_star, interpret_palace, palace_info, stars,
    zodiac_compatibility, zodiac_sign,
};
use yun_rs::{
    ChartCompatibility, Element, JsonFileStore, LotteryType, ProfileStore, UserProfile,
    YunConfig, YunError, best_timing, compatibility, lucky_elements, read_with, recommend_lottery,
    recommend_lottery_now,
};
use yun_time::{BirthData, CivilDate, parse_hour};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "YUN_LOG";

const NO_PROFILE_HINT: &str = "No birth date given and no profile found.\n\
    Save one with: yun profile set <name> <birth-date> <birth-time> [birthplace]\n\
    Example: yun profile set \"Guang Ming He\" 1982-12-12 4 \"Kaiping, China\"";

#[derive(Parser)]
#[command(name = "yun", about = "運 Chinese astrology CLI", version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Derive hour stems from the day stem (五鼠遁) instead of the hour branch
    #[arg(long, global = true)]
    day_stem_hours: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars reading (uses the saved profile when no date is given)
    Read {
        /// Birth date: YYYY-MM-DD, YYYY/MM/DD or YYYYMMDD
        date: Option<String>,
        /// Birth time: HH, HH:MM or HHMM (default 12)
        time: Option<String>,
    },
    /// Compatibility of two birth dates
    Compat { date1: String, date2: String },
    /// Lucky colors, numbers, directions and months for a Day Master
    Lucky {
        /// wood, fire, earth, metal or water (or 木火土金水)
        #[arg(default_value = "wood")]
        element: String,
    },
    /// Score a date for an undertaking (择日)
    Timing {
        date: String,
        /// Day Master element
        element: String,
        /// business, marriage, travel or construction
        #[arg(long, default_value = "business")]
        purpose: String,
    },
    /// Zodiac sign of a year, or lucky attributes of an animal
    Zodiac {
        /// CE year or animal name
        year_or_animal: String,
        /// Second year or animal to check compatibility against
        other: Option<String>,
    },
    /// List the 14 major stars and 12 palaces, or look up one star
    Stars {
        /// Star name, romanization or part of the name
        name: Option<String>,
    },
    /// Purple Star palace placement (uses the saved profile when no date is given)
    Palaces {
        date: Option<String>,
        time: Option<String>,
    },
    /// Lottery numbers (uses the saved profile when no date is given)
    Lottery {
        date: Option<String>,
        time: Option<String>,
        /// Seed the number draw for repeatable output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Manage the saved profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the saved profile
    Show,
    /// Create or replace the saved profile
    Set {
        name: String,
        date: String,
        time: String,
        birthplace: Vec<String>,
    },
    /// Delete the saved profile
    Delete,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn ok<T>(result: Result<T, YunError>) -> T {
    result.unwrap_or_else(|e| fail(e))
}

fn require_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| fail(e))
}

fn require_hour(s: &str) -> u32 {
    parse_hour(s).unwrap_or_else(|e| fail(e))
}

fn require_element(s: &str) -> Element {
    Element::from_name(s).unwrap_or_else(|| {
        fail(format!("Invalid element: {s}\nValid: wood, fire, earth, metal, water"))
    })
}

fn require_purpose(s: &str) -> Purpose {
    Purpose::from_name(s).unwrap_or_else(|| {
        fail(format!("Invalid purpose: {s}\nValid: business, marriage, travel, construction"))
    })
}

fn require_animal(s: &str) -> (Animal, Option<ZodiacSign>) {
    if let Ok(year) = s.trim().parse::<i32>() {
        let sign = zodiac_sign(year);
        return (sign.animal, Some(sign));
    }
    match Animal::from_name(s) {
        Some(animal) => (animal, None),
        None => fail(format!("Not a year or zodiac animal: {s}")),
    }
}

fn emit_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("Failed to encode JSON: {e}")),
    }
}

/// Birth data from the command line, or from the saved profile when no date is given.
fn resolve_birth(
    date: Option<&str>,
    time: Option<&str>,
    config: &YunConfig,
) -> (BirthData, Option<UserProfile>) {
    let Some(date) = date else {
        let store = JsonFileStore::from_config(config);
        let profile = match store.load() {
            Ok(Some(profile)) => profile,
            Ok(None) => fail(NO_PROFILE_HINT),
            Err(e) => fail(e),
        };
        debug!(path = %store.path().display(), "using saved profile");
        return (ok(profile.birth_data()), Some(profile));
    };
    let hour = time.map_or(config.default_hour, require_hour);
    let birth = require_date(date)
        .at_hour(hour)
        .with_timezone(config.default_timezone.clone());
    (birth, None)
}

fn print_header(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("  {title}");
    println!("{}", "=".repeat(50));
}

fn print_pillar(label: &str, pillar: Pillar) {
    println!(
        "   {label:<6} {} {} ({})",
        pillar.glyphs(),
        pillar.pinyin(),
        pillar.branch.animal().name()
    );
}

fn join<T: Display>(items: &[T]) -> String {
    items.iter().map(T::to_string).collect::<Vec<_>>().join(", ")
}

fn birth_line(birth: &BirthData, profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!("{birth} - {}", p.name),
        None => birth.to_string(),
    }
}

fn cmd_read(birth: &BirthData, profile: Option<&UserProfile>, config: &YunConfig, json: bool) {
    let options = config.pillar_options();
    let reading = ok(read_with(birth, options));
    if json {
        emit_json(&reading);
        return;
    }
    let details = &reading.details;
    let chart = &details.chart;

    print_header("八字 Four Pillars Reading");
    println!("\nBirth: {}", birth_line(birth, profile));
    println!("\nFour Pillars:");
    print_pillar("Year", chart.year);
    print_pillar("Month", chart.month);
    print_pillar("Day", chart.day);
    print_pillar("Hour", chart.hour);
    println!("   日主 Day Master: {}", chart.day_master.name());

    println!("\n{}", reading.summary);
    println!("\nElement balance:");
    for b in &details.element_balance {
        println!(
            "   {} {:<5} {} ({:>5.1}%) {:?}",
            b.element.glyph(),
            b.element.name(),
            b.count,
            b.percentage,
            b.strength
        );
    }
    println!("\nStrengths: {}", details.strengths.join(", "));
    println!("Weaknesses: {}", details.weaknesses.join(", "));

    let lucky = &details.lucky_elements;
    println!("\nLucky Elements:");
    println!("   Colors: {}", lucky.colors.join(", "));
    println!("   Numbers: {}", join(&lucky.numbers));
    println!("   Directions: {}", lucky.directions.join(", "));

    if !reading.recommendations.is_empty() {
        println!("\nRecommendations:");
        for (i, r) in reading.recommendations.iter().enumerate() {
            println!("   {}. {r}", i + 1);
        }
    }

    print_header("生肖 Chinese Zodiac");
    let sign = details.zodiac_sign;
    let attrs = sign.animal.lucky_attributes();
    println!(
        "\n{} ({} {})",
        sign.animal.name(),
        sign.element.name(),
        sign.polarity.name()
    );
    println!("   Lucky Colors: {}", attrs.colors.join(", "));
    println!("   Lucky Numbers: {}", join(attrs.numbers));
    println!("   Lucky Directions: {}", attrs.directions.join(", "));
}

#[derive(Serialize)]
struct CompatReport<'a> {
    chart: &'a ChartCompatibility,
    zodiac: ZodiacCompatibility,
}

fn cmd_compat(date1: &str, date2: &str, config: &YunConfig, json: bool) {
    let a = require_date(date1).at_hour(config.default_hour);
    let b = require_date(date2).at_hour(config.default_hour);
    let chart = ok(compatibility(&a, &b));
    let (za, zb) = (zodiac_sign(a.year), zodiac_sign(b.year));
    let zodiac = zodiac_compatibility(za.animal, zb.animal);
    if json {
        emit_json(&CompatReport {
            chart: &chart,
            zodiac,
        });
        return;
    }

    print_header("Compatibility Analysis");
    println!("\nCompatibility Score: {}/100", chart.score);
    println!("   {}", chart.summary);
    println!("\n   Details:");
    for d in &chart.details {
        println!("   - {d}");
    }
    println!("\nZodiac: {} + {}", za.animal.name(), zb.animal.name());
    println!("   Score: {}/100 ({})", zodiac.score, zodiac.label);
    println!("   {}", zodiac.description);
}

fn cmd_lucky(element: &str, json: bool) {
    let element = require_element(element);
    let lucky = lucky_elements(element);
    if json {
        emit_json(&lucky);
        return;
    }
    print_header("Lucky Elements");
    println!("\nFor {} Day Master:", element.name());
    println!("   Colors: {}", lucky.colors.join(", "));
    println!("   Numbers: {}", join(&lucky.numbers));
    println!("   Directions: {}", lucky.directions.join(", "));
    println!("   Lucky Months: {}", join(&lucky.months));
}

fn cmd_timing(date: &str, element: &str, purpose: &str, json: bool) {
    let civil = require_date(date);
    let Some(naive) = civil.to_naive() else {
        fail(format!("Date does not exist: {civil}"));
    };
    let advice = best_timing(naive, require_element(element), require_purpose(purpose));
    if json {
        emit_json(&advice);
        return;
    }
    print_header("择日 Date Selection");
    println!("\n{} for {}", naive, advice.purpose.name());
    println!("   Score: {}/100", advice.score);
    println!("   {}", advice.reason);
}

#[derive(Serialize)]
struct ZodiacReport<'a> {
    animal: Animal,
    sign: Option<ZodiacSign>,
    lucky: &'a yun_base::AnimalLuck,
    compatibility: Option<ZodiacCompatibility>,
}

fn cmd_zodiac(subject: &str, other: Option<&str>, json: bool) {
    let (animal, sign) = require_animal(subject);
    let compat = other.map(|o| zodiac_compatibility(animal, require_animal(o).0));
    let lucky = animal.lucky_attributes();
    if json {
        emit_json(&ZodiacReport {
            animal,
            sign,
            lucky,
            compatibility: compat,
        });
        return;
    }

    print_header("生肖 Chinese Zodiac");
    match sign {
        Some(s) => println!(
            "\n{}: {} ({} {})",
            s.year,
            animal.name(),
            s.element.name(),
            s.polarity.name()
        ),
        None => println!("\n{} ({})", animal.name(), animal.branch().glyph()),
    }
    println!("   Colors: {}", lucky.colors.join(", "));
    println!("   Numbers: {}", join(lucky.numbers));
    println!("   Directions: {}", lucky.directions.join(", "));
    println!("   Flowers: {}", lucky.flowers.join(", "));
    println!("   Gemstones: {}", lucky.gemstones.join(", "));
    println!(
        "   Best match: {}; avoid: {}",
        animal.six_harmony().name(),
        animal.six_conflict().name()
    );

    if let Some(c) = compat {
        println!("\nCompatibility: {}/100 {} - {}", c.score, c.label, c.description);
    }
}

fn print_star(index: usize, star: &Star) {
    println!("{index}. {} ({})", star.name, star.romanization);
    println!(
        "   Element: {} | Keywords: {}",
        star.element.name(),
        star.keywords.join(", ")
    );
}

fn cmd_stars(name: Option<&str>, json: bool) {
    if let Some(query) = name {
        let Some(star) = find_star(query) else {
            fail(format!("No star matches '{query}'"));
        };
        if json {
            emit_json(star);
        } else {
            print_star(1, star);
        }
        return;
    }

    if json {
        emit_json(&serde_json::json!({
            "stars": stars(),
            "palaces": palace_info(),
        }));
        return;
    }
    print_header("14 Major Stars (十四主星)");
    println!();
    for (i, star) in stars().iter().enumerate() {
        print_star(i + 1, star);
    }
    print_header("12 Palaces (十二宮)");
    println!();
    for info in palace_info() {
        println!("{}: {}", info.palace.glyph(), info.description);
    }
}

#[derive(Serialize)]
struct PalaceView {
    #[serde(flatten)]
    assignment: PalaceAssignment,
    reading: PalaceReading,
}

fn cmd_palaces(birth: &BirthData, profile: Option<&UserProfile>, json: bool) {
    if let Err(e) = birth.validate() {
        fail(e);
    }
    let views: Vec<PalaceView> = calculate_palaces(birth)
        .into_iter()
        .map(|assignment| PalaceView {
            reading: interpret_palace(assignment.palace, &assignment.stars),
            assignment,
        })
        .collect();
    if json {
        emit_json(&views);
        return;
    }

    print_header("紫微斗數 Purple Star Palaces");
    println!("\nBirth: {}", birth_line(birth, profile));
    println!("(simplified placement from the birth day)");
    for view in &views {
        println!(
            "\n{} [{} + {}]",
            view.reading.summary,
            view.assignment.primary().name,
            view.assignment.secondary().name
        );
        for line in &view.reading.analysis {
            println!("   {line}");
        }
        for s in &view.reading.suggestions {
            println!("   > {s}");
        }
    }
}

fn cmd_lottery(
    birth: &BirthData,
    profile: Option<&UserProfile>,
    seed: Option<u64>,
    json: bool,
) {
    let rec = match seed {
        Some(seed) => ok(recommend_lottery(
            birth,
            Local::now().hour(),
            &mut StdRng::seed_from_u64(seed),
        )),
        None => ok(recommend_lottery_now(birth)),
    };
    if json {
        emit_json(&rec);
        return;
    }

    print_header("Lottery Recommendation");
    println!("\nBirth: {}", birth_line(birth, profile));
    println!("Today: {}", Local::now().format("%Y-%m-%d %H:%M"));
    println!("\nRecommended: {}", rec.lottery_type.label());
    println!("   {}", rec.reason);

    println!("\nYour Lucky Numbers:");
    println!("   Lotto 6/49 (6 numbers from 1-49): {}", join(&rec.numbers.main));
    println!("   Lotto Max  (7 numbers from 1-50): {}", join(&rec.numbers.max));

    println!("\nNumber Sources:");
    for s in &rec.sources {
        println!("   - {s}");
    }
    println!("\nGeneration Method:");
    println!("   - 50% from your lucky numbers + hot draws");
    println!("   - 50% random for realistic distribution");
    if rec.lottery_type == LotteryType::Either {
        println!("   - Either game suits you; compare jackpots");
    }
    println!("\nFor entertainment only. Play responsibly.");
}

fn cmd_profile(action: Option<ProfileAction>, config: &YunConfig, json: bool) {
    let mut store = JsonFileStore::from_config(config);
    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => {
            let Some(profile) = ok(store.load()) else {
                fail(NO_PROFILE_HINT);
            };
            if json {
                emit_json(&profile);
                return;
            }
            print_header("Your Profile");
            println!("   Name: {}", profile.name);
            println!("   Birth: {} @ {}:00", profile.birth_date, profile.birth_time);
            println!("   Place: {}", profile.birthplace);
            println!("   Timezone: {}", profile.timezone);
            println!("   Created: {}", profile.created_at);
        }
        ProfileAction::Set {
            name,
            date,
            time,
            birthplace,
        } => {
            let profile = UserProfile::new(
                name,
                require_date(&date),
                require_hour(&time),
                &birthplace.join(" "),
            )
            .with_timezone(config.default_timezone.clone());
            ok(profile.birth_data());
            ok(store.save(&profile));
            println!("Profile saved to {}", store.path().display());
            println!("   Name: {}", profile.name);
            println!("   Birth: {} @ {}:00", profile.birth_date, profile.birth_time);
            println!("   Place: {}", profile.birthplace);
        }
        ProfileAction::Delete => {
            if ok(store.delete()) {
                println!("Profile deleted");
            } else {
                println!("No profile to delete");
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = YunConfig::from_env();
    if cli.day_stem_hours {
        config = config.with_hour_stem(yun_base::HourStemMode::DayStem);
    }
    debug!(profile = %config.profile_path.display(), hour_stem = ?config.hour_stem, "config");

    match cli.command {
        Commands::Read { date, time } => {
            let (birth, profile) = resolve_birth(date.as_deref(), time.as_deref(), &config);
            cmd_read(&birth, profile.as_ref(), &config, cli.json);
        }
        Commands::Compat { date1, date2 } => cmd_compat(&date1, &date2, &config, cli.json),
        Commands::Lucky { element } => cmd_lucky(&element, cli.json),
        Commands::Timing {
            date,
            element,
            purpose,
        } => cmd_timing(&date, &element, &purpose, cli.json),
        Commands::Zodiac {
            year_or_animal,
            other,
        } => cmd_zodiac(&year_or_animal, other.as_deref(), cli.json),
        Commands::Stars { name } => cmd_stars(name.as_deref(), cli.json),
        Commands::Palaces { date, time } => {
            let (birth, profile) = resolve_birth(date.as_deref(), time.as_deref(), &config);
            cmd_palaces(&birth, profile.as_ref(), cli.json);
        }
        Commands::Lottery { date, time, seed } => {
            let (birth, profile) = resolve_birth(date.as_deref(), time.as_deref(), &config);
            cmd_lottery(&birth, profile.as_ref(), seed, cli.json);
        }
        Commands::Profile { action } => cmd_profile(action, &config, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn read_accepts_optional_date_and_time() {
        let cli = Cli::try_parse_from(["yun", "read", "1990-08-15", "14"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Read { date: Some(ref d), time: Some(ref t) } if d == "1990-08-15" && t == "14"
        ));
        let cli = Cli::try_parse_from(["yun", "read"]).unwrap();
        assert!(matches!(cli.command, Commands::Read { date: None, time: None }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["yun", "lottery", "--seed", "7", "--json", "-v"]).unwrap();
        assert!(cli.json && cli.verbose);
        assert!(matches!(cli.command, Commands::Lottery { seed: Some(7), .. }));
    }

    #[test]
    fn profile_set_collects_birthplace_words() {
        let cli = Cli::try_parse_from([
            "yun", "profile", "set", "Name", "1982-12-12", "4", "Kaiping,", "China",
        ])
        .unwrap();
        let Commands::Profile {
            action: Some(ProfileAction::Set { birthplace, .. }),
        } = cli.command
        else {
            panic!("expected profile set");
        };
        assert_eq!(birthplace.join(" "), "Kaiping, China");
    }

    #[test]
    fn timing_purpose_defaults_to_business() {
        let cli = Cli::try_parse_from(["yun", "timing", "2026-10-18", "water"]).unwrap();
        assert!(matches!(cli.command, Commands::Timing { ref purpose, .. } if purpose == "business"));
    }
}
