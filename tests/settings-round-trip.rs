#![cfg(feature = "yaml")]

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use yamlfields::{named_enum, yaml};

named_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Target {
        Disk = "disk",
        Cloud = "cloud",
    }
}

#[derive(Debug, PartialEq)]
struct Job {
    name: String,
    enabled: bool,
    retries: i32,
    target: Target,
    max_size: u64,
    interval: u64,
    paths: Vec<String>,
    exclude: Vec<String>,
    notes: String,
    created: NaiveDate,
    last_run: DateTime<Utc>,
}

impl Job {
    fn load(node: &serde_yaml::Value) -> Result<(Self, bool)> {
        let exclude = yaml::lenient_string_list_from(node, "exclude", Vec::new())?;

        let job = Self {
            name: yaml::string_from(node, "name", "")?,
            enabled: yaml::bool_from(node, "enabled", true)?,
            retries: yaml::i32_from(node, "retries", 3)?,
            target: yaml::enum_from(node, "target", Target::Disk)?,
            max_size: yaml::file_size_from(node, "max-size", 0)?,
            interval: yaml::duration_from(node, "interval", 0)?,
            paths: yaml::string_list_from(node, "paths", Vec::new())?,
            exclude: exclude.items,
            notes: yaml::string_from(node, "notes", "")?,
            created: yaml::date_from(node, "created", NaiveDate::default())?,
            last_run: yaml::date_time_from(node, "last-run", DateTime::default())?,
        };

        Ok((job, exclude.needs_save))
    }

    fn save(&self, out: &mut yaml::Emitter) {
        out.string("name", &self.name);
        out.bool("enabled", self.enabled);
        out.i32("retries", self.retries);
        out.named("target", self.target);
        out.file_size("max-size", self.max_size);
        out.duration("interval", self.interval);
        out.string_list("paths", &self.paths, false);
        out.string_list("exclude", &self.exclude, true);
        out.literal("notes", &self.notes);
        out.date("created", self.created);
        out.date_time("last-run", self.last_run);
    }
}

fn job() -> Job {
    Job {
        name: String::from("photos"),
        enabled: false,
        retries: -1,
        target: Target::Cloud,
        max_size: 2_500_000_123,
        interval: 3661,
        paths: vec![String::from("/home/me/Pictures"), String::from("C:\\Photos")],
        exclude: vec![String::from("*.tmp"), String::from("cache, old")],
        notes: String::from("Runs at night.\nDon't touch!\n"),
        created: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        last_run: Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
    }
}

#[test]
fn raw_quantities_round_trip() -> Result<()> {
    let original = job();

    let mut out = yaml::Emitter::new();
    out.mapping("job", |out| original.save(out));

    let doc: serde_yaml::Value = serde_yaml::from_str(out.as_str())?;
    let node = doc.get("job").context("missing job")?;

    let (loaded, needs_save) = Job::load(node)?;
    assert_eq!(loaded, original);
    assert!(!needs_save);
    Ok(())
}

#[test]
fn human_quantities_are_lossy() -> Result<()> {
    let original = job();

    let options = yaml::Options::new().with_quantities(yaml::QuantityStyle::Human);
    let mut out = yaml::Emitter::with_options(options);
    original.save(&mut out);

    assert!(out.as_str().contains("max-size: 2.51 GB\n"), "{out}");
    assert!(out.as_str().contains("interval: 1h 1m\n"), "{out}");

    let doc: serde_yaml::Value = serde_yaml::from_str(out.as_str())?;
    let (loaded, _) = Job::load(&doc)?;

    assert!(loaded.max_size.abs_diff(2_510_000_000) <= 1, "{}", loaded.max_size);
    assert_eq!(loaded.interval, 3660);
    assert_eq!(loaded.paths, original.paths);
    Ok(())
}

#[test]
fn defaults_and_legacy_lists() -> Result<()> {
    let doc: serde_yaml::Value = serde_yaml::from_str(
        r"
        name: minimal
        exclude: '*.tmp, *.log'
        ",
    )?;

    let (job, needs_save) = Job::load(&doc)?;

    assert_eq!(job.name, "minimal");
    assert!(job.enabled);
    assert_eq!(job.retries, 3);
    assert_eq!(job.target, Target::Disk);
    assert_eq!(job.max_size, 0);
    assert!(job.paths.is_empty());
    assert_eq!(job.exclude, ["*.tmp", "*.log"]);
    assert!(needs_save);

    let mut out = yaml::Emitter::new();
    job.save(&mut out);
    assert!(out.as_str().contains("exclude: ['*.tmp', '*.log']\n"), "{out}");
    // Empty lists and literals are left out entirely.
    assert!(!out.as_str().contains("paths"), "{out}");
    assert!(!out.as_str().contains("notes"), "{out}");
    Ok(())
}

#[test]
fn wrong_shape_names_the_key() -> Result<()> {
    let doc: serde_yaml::Value = serde_yaml::from_str("paths: /only/one\n")?;
    let error = Job::load(&doc).unwrap_err();
    let error = error.downcast_ref::<yaml::Error>().context("not a yaml error")?;

    assert_eq!(error.key(), "paths");
    assert_eq!(error.kind(), yaml::ErrorKind::ExpectedSequence);
    Ok(())
}
