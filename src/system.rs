//! The Utakata no Alsetto game system as seen by a dice-bot host.

use std::sync::LazyLock;
use regex::Regex;
use tracing::debug;
use crate::Error;
use crate::parser::parse_command;
use crate::roll::DiceSource;


static PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)^(?:{})", GameSystem::PREFIX)).unwrap());


/// Identity and entry point of the game system.
///
/// A host keeps one of these per registered system and hands it every command
/// whose prefix matches.
///
/// # Examples
/// ```
/// use alsetto::{GameSystem, ScriptedSource};
///
/// let system = GameSystem;
/// let mut source = ScriptedSource::new([4, 1, 6, 3, 2, 5]);
///
/// let output = system.eval("5AL", &mut source).unwrap();
/// assert_eq!(output.as_deref(), Some("(5D6<=3) ＞ 3[1,2,3,4,6]+0[5] ＞ 成功数：3 / 1トライアンフ"));
///
/// assert_eq!(system.eval("2D6", &mut source).unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSystem;

impl GameSystem {
    /// Identifier the host registers the system under.
    pub const ID: &'static str = "Alsetto";

    /// Display name.
    pub const NAME: &'static str = "詩片のアルセット";

    /// Reading of [`GameSystem::NAME`], used for sorting system lists.
    pub const SORT_KEY: &'static str = "うたかたのあるせつと";

    /// Coarse command filter. Matching it does not guarantee a valid check.
    pub const PREFIX: &'static str = r"\d+AL[CG]?";

    /// Command reference shown by the host's help command.
    pub const HELP_MESSAGE: &'static str = "\
・成功判定：nAL[m]　　　　・トライアンフ無し：nALC[m]
・命中判定：nAL[m]*p　　　・トライアンフ無し：nALC[m]*p
・命中判定（ガンスリンガーの根源詩）：nALG[m]*p
[]内は省略可能。

ALコマンドはトライアンフの分だけ、自動で振り足し処理を行います。
「n」でダイス数を指定。
「m」で目標値を指定。省略時は、デフォルトの「3」が使用されます。
「p」で攻撃力を指定。「*」は「x」でも可。
攻撃力指定で命中判定となり、成功数ではなく、ダメージを結果表示します。

ALCコマンドはトライアンフ無しで、成功数、ダメージを結果表示します。
ALGコマンドは「2以下」でトライアンフ処理を行います。

【書式例】
・5AL → 5d6で目標値3。
・5ALC → 5d6で目標値3。トライアンフ無し。
・6AL2 → 6d6で目標値2。
・4AL*5 → 4d6で目標値3、攻撃力5の命中判定。
・7AL2x10 → 7d6で目標値2、攻撃力10の命中判定。
・8ALC4x5 → 8d6で目標値4、攻撃力5、トライアンフ無しの命中判定。
";

    /// Returns `true` if `command` starts like a check command, case-insensitively.
    pub fn matches_prefix(&self, command: &str) -> bool {
        PREFIX_REGEX.is_match(command.trim_start())
    }

    /// Evaluates a command, returning the result line or `None` if the command
    /// is not a check of this system.
    ///
    /// # Errors
    /// Returns an [`Error`] when `source` fails or yields a malformed batch.
    /// The whole command is then aborted, no partial output is produced.
    pub fn eval<S: DiceSource + ?Sized>(&self, command: &str, source: &mut S) -> Result<Option<String>, Error> {
        if !self.matches_prefix(command) {
            return Ok(None);
        }

        let Some(check) = parse_command(command) else {
            return Ok(None);
        };

        let result = check.resolve(source)?;
        debug!(system = Self::ID, command, "evaluated command");

        Ok(Some(result.to_string()))
    }
}
