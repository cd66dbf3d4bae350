//! Batting line calculator.

use serde::{Deserialize, Serialize};

use super::format::{format_avg, safe_divide};

/// Accumulated batting events for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BattingCounts {
    pub games: u32,
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub strikeouts: u32,
    pub sacrifice_flies: u32,
    pub sacrifice_bunts: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub grounded_into_double_play: u32,
    pub runs: u32,
    pub rbi: u32,
}

impl BattingCounts {
    pub fn total_bases(&self) -> u64 {
        u64::from(self.singles)
            + 2 * u64::from(self.doubles)
            + 3 * u64::from(self.triples)
            + 4 * u64::from(self.home_runs)
    }
}

/// Counting stats echoed back plus derived rates. Rates are `None` when
/// their denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStatsOutput {
    pub games: u32,
    pub pa: u32,
    pub ab: u32,
    pub h: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub hr: u32,
    pub rbi: u32,
    pub r: u32,
    pub bb: u32,
    pub k: u32,
    pub hbp: u32,
    pub sb: u32,
    pub cs: u32,
    pub tb: u64,

    pub avg: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
    pub iso: Option<f64>,
    pub babip: Option<f64>,
    pub k_percent: Option<f64>,
    pub bb_percent: Option<f64>,
    pub sb_percent: Option<f64>,

    pub avg_display: String,
    pub obp_display: String,
    pub slg_display: String,
    pub ops_display: String,
}

/// Derive a batting line from counts. Sums are taken in `f64` so no count
/// combination can overflow.
pub fn compute_batting_line(counts: &BattingCounts) -> BattingStatsOutput {
    let c = counts;
    let tb = c.total_bases();
    let ab = f64::from(c.at_bats);
    let pa = f64::from(c.plate_appearances);

    let avg = safe_divide(f64::from(c.hits), ab);
    let on_base = f64::from(c.walks) + f64::from(c.hit_by_pitch);
    let obp = safe_divide(
        f64::from(c.hits) + on_base,
        ab + on_base + f64::from(c.sacrifice_flies),
    );
    let slg = safe_divide(tb as f64, ab);
    let ops = obp.zip(slg).map(|(o, s)| o + s);
    let iso = slg.zip(avg).map(|(s, a)| s - a);

    // Signed; the denominator can go negative.
    let babip_num = i64::from(c.hits) - i64::from(c.home_runs);
    let babip_den = i64::from(c.at_bats) - i64::from(c.strikeouts) - i64::from(c.home_runs)
        + i64::from(c.sacrifice_flies);
    let babip = safe_divide(babip_num as f64, babip_den as f64);

    let k_percent = safe_divide(f64::from(c.strikeouts), pa);
    let bb_percent = safe_divide(f64::from(c.walks), pa);
    let sb_percent = safe_divide(
        f64::from(c.stolen_bases),
        f64::from(c.stolen_bases) + f64::from(c.caught_stealing),
    );

    BattingStatsOutput {
        games: c.games,
        pa: c.plate_appearances,
        ab: c.at_bats,
        h: c.hits,
        singles: c.singles,
        doubles: c.doubles,
        triples: c.triples,
        hr: c.home_runs,
        rbi: c.rbi,
        r: c.runs,
        bb: c.walks,
        k: c.strikeouts,
        hbp: c.hit_by_pitch,
        sb: c.stolen_bases,
        cs: c.caught_stealing,
        tb,
        avg,
        obp,
        slg,
        ops,
        iso,
        babip,
        k_percent,
        bb_percent,
        sb_percent,
        avg_display: format_avg(avg),
        obp_display: format_avg(obp),
        slg_display: format_avg(slg),
        ops_display: format_avg(ops),
    }
}
