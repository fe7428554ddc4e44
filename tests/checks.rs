use alsetto::{
    parse_command, resolve, CriticalMode, DiceSource, Error, GameSystem, RandomSource, ScriptedSource,
};

/// Yields only triumph faces for a fixed number of dice, then only misses.
struct TriumphBurst {
    left: u32,
}

impl DiceSource for TriumphBurst {
    fn roll_dice(&mut self, count: u16, _faces: u16) -> Result<Vec<u16>, Error> {
        Ok((0..count)
            .map(|_| {
                if self.left > 0 {
                    self.left -= 1;
                    1
                } else {
                    6
                }
            })
            .collect())
    }
}

#[test]
fn standard_check_rerolls_triumphs() {
    let check = parse_command("5AL").unwrap();
    assert_eq!(check.target(), 3);
    assert_eq!(check.mode().threshold(), 1);
    assert!(check.mode().is_enabled());

    let mut source = ScriptedSource::new([4, 1, 6, 3, 2, 5]);
    let result = resolve(&check, &mut source).unwrap();

    assert_eq!(source.requests(), &[5, 1]);
    assert_eq!(result.waves()[0].faces(), &[1, 2, 3, 4, 6]);
    assert_eq!(result.waves()[0].successes(), 3);
    assert_eq!(result.waves()[0].criticals(), 1);
    assert_eq!(
        result.to_string(),
        "(5D6<=3) ＞ 3[1,2,3,4,6]+0[5] ＞ 成功数：3 / 1トライアンフ"
    );
}

#[test]
fn no_triumph_damage_check_rolls_once() {
    let check = parse_command("8ALC4x5").unwrap();
    assert_eq!(check.mode(), CriticalMode::NoTriumph);

    let mut source = ScriptedSource::new([1, 1, 1, 1, 1, 1, 1, 1]);
    let output = resolve(&check, &mut source).unwrap().to_string();

    assert_eq!(source.requests(), &[8]);
    assert!(output.contains("Hits："));
    assert!(output.contains("ダメージ"));
    assert!(!output.contains("トライアンフ"));
    assert_eq!(output, "(8D6<=4) ＞ 8[1,1,1,1,1,1,1,1] ＞ Hits：8*5 ＞ 40ダメージ");
}

#[test]
fn damage_check_multiplies_total_successes() {
    let check = parse_command("7AL2x10").unwrap();
    assert_eq!(check.target(), 2);
    assert_eq!(check.mode().threshold(), 1);
    assert_eq!(check.damage(), 10);

    for seed in 0..50 {
        let result = check.resolve(&mut RandomSource::seeded(seed)).unwrap();
        let output = result.to_string();

        assert!(output.contains(&format!("Hits：{}*10", result.successes())), "{output}");
        assert_eq!(result.damage(), Some(result.successes() * 10));
    }
}

#[test]
fn missing_dice_count_is_no_match() {
    assert_eq!(parse_command("abcAL"), None);
    assert_eq!(parse_command("AL5"), None);
    assert_eq!(GameSystem.eval("AL5", &mut RandomSource::seeded(1)), Ok(None));
}

#[test]
fn all_triumph_wave_rerolls_every_die() {
    let check = parse_command("3AL").unwrap();
    let mut source = TriumphBurst { left: 7 };
    let result = check.resolve(&mut source).unwrap();

    let sizes: Vec<usize> = result.waves().iter().map(|w| w.faces().len()).collect();
    assert_eq!(sizes, vec![3, 3, 3, 1]);
    assert_eq!(result.triumphs(), 3);
    assert_eq!(result.successes(), 7);
}

#[test]
fn gunslinger_triumphs_on_two() {
    let check = parse_command("2alg").unwrap();
    let mut source = ScriptedSource::new([2, 5, 6]);
    let result = check.resolve(&mut source).unwrap();

    assert_eq!(
        result.to_string(),
        "(2D6<=3) ＞ 1[2,5]+0[6] ＞ 成功数：1 / 1トライアンフ"
    );
}

#[test]
fn seeded_sources_give_identical_output() {
    let first = GameSystem.eval("12ALG4x3", &mut RandomSource::seeded(7)).unwrap();
    let second = GameSystem.eval("12ALG4x3", &mut RandomSource::seeded(7)).unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn largest_damage_check_reports_exact_total() {
    let check = parse_command("65535AL6x65535").unwrap();
    let result = check.resolve(&mut RandomSource::seeded(1)).unwrap();

    let exact = result.successes() * 65_535;
    assert!(result.successes() > u16::MAX as u64);
    assert_eq!(result.damage(), Some(exact));
    assert!(result
        .to_string()
        .contains(&format!("Hits：{}*65535 ＞ {}ダメージ", result.successes(), exact)));
}
