use dpm_instances::{
    instance_name, instance_path, read_instance, reader::parse_instance, write_instance,
    write_instance_file, DistanceTable, Instance, InstanceBuilder, InstanceError, Period,
    PeriodSelector, ScalingContext, TravelTime, DIAGONAL_MARKER,
};
use std::path::Path;

struct LastSelector;

impl PeriodSelector for LastSelector {
    fn select(&mut self, candidates: &[u32]) -> u32 {
        candidates[candidates.len() - 1]
    }
}

fn instance() -> Instance {
    let table = DistanceTable::from_finite(vec![
        vec![DIAGONAL_MARKER, 81.0, 18.0],
        vec![81.0, DIAGONAL_MARKER, 27.0],
        vec![18.0, 27.0, DIAGONAL_MARKER],
    ])
    .unwrap();
    InstanceBuilder::new(
        ScalingContext {
            base_time_horizon: 108,
            base_drone_endurance: 90,
            target_time_horizon: 12,
        },
        20,
        vec![3, 6, 12, 18, 24],
    )
    .build(&table, &mut LastSelector)
    .unwrap()
}

const EXPECTED: &str = "numNode\tnumCus\tID_Depot\tMile(min)\tBegin\tEnd\tnumUAV
3\t2\t0\t10\t0\t12\t20\t
time_vec & deta1 & deta2:
0\t10000000\t9\t2\t0\t100000\t
1\t9\t10000000\t3\t0\t12\t
2\t2\t3\t10000000\t0\t12\t
";

#[test]
fn test_instance_name() {
    assert_eq!(instance_name("C1", 10, 20, 12, "1p"), "C1N10D20T12V1p");
    assert_eq!(
        instance_name("SZ_Gusu", 19, 30, 12, "1p"),
        "SZ_GusuN19D30T12V1p"
    );
}

#[test]
fn test_instance_path() {
    assert_eq!(
        instance_path(Path::new("input"), "RC1", "RC1N35D100T18V30p"),
        Path::new("input/RC1/RC1N35D100T18V30p.txt")
    );
}

#[test]
fn test_write_instance_layout() {
    let mut out = Vec::new();
    write_instance(&instance(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let instance = instance();
    let path = instance_path(dir.path(), "C1", "C1N2D20T12V1p");
    write_instance_file(&instance, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), EXPECTED);
    let parsed = read_instance(&path).unwrap();
    assert_eq!(parsed, instance);
    assert_eq!(parsed.periods(), vec![Period::Never, Period::Every(12), Period::Every(12)]);
    assert_eq!(parsed.travel_time(1, 1), TravelTime::Infinite);
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "stale contents that are longer than nothing").unwrap();
    write_instance_file(&instance(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), EXPECTED);
}

#[test]
fn test_write_to_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("C1");
    std::fs::write(&blocker, "a file where a directory should be").unwrap();
    let err = write_instance_file(&instance(), &blocker.join("x.txt")).unwrap_err();
    assert!(matches!(err, InstanceError::Io { .. }));
}

#[test]
fn test_parse_instance_errors() {
    let path = Path::new("broken.txt");
    assert!(parse_instance(path, "").is_err());
    assert!(parse_instance(path, "numNode\n").is_err());

    let missing_row = EXPECTED.lines().take(5).collect::<Vec<_>>().join("\n");
    let err = parse_instance(path, &missing_row).unwrap_err();
    assert!(err.to_string().contains("row for node 2"));

    let bad_value = EXPECTED.replace("1\t9\t10000000", "1\tx\t10000000");
    let err = parse_instance(path, &bad_value).unwrap_err();
    assert!(err.to_string().contains("line 5"));

    let short_row = EXPECTED.replace("2\t2\t3\t10000000\t0\t12\t", "2\t2\t3\t0\t12\t");
    let err = parse_instance(path, &short_row).unwrap_err();
    assert!(err.to_string().contains("expected 6 fields"));
}
