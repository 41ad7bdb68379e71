pub const NESTED_INPUT: &str = r#"{"a":1,"b":[2,3],"c":"x\ny"}"#;
pub const NESTED_EVENTS: &str = r#"
+OBJ
=VAL "a
=VAL :1
=VAL "b
+ARR
=VAL :2
=VAL :3
-ARR
=VAL "c
=VAL "x\ny
-OBJ"#;

pub const SEQ_COMMA_INPUT: &str = "[1,2,3]";
pub const SEQ_SPACE_INPUT: &str = "[1 2 3]";
pub const SEQ_NEWLINE_INPUT: &str = r"[
    1
    2
    3
]";
pub const SEQ_MIXED_INPUT: &str = "[1,,2 ,\t3 ,]";
pub const SEQ_EVENTS: &str = r"
+ARR
=VAL :1
=VAL :2
=VAL :3
-ARR";

pub const BARE_KEY_INPUT: &str = "{ident: 42}";
pub const BARE_KEY2_INPUT: &str = "{ident 42}";
pub const BARE_KEY3_INPUT: &str = r#"{"ident": 42}"#;
pub const BARE_KEY_EVENTS: &str = r"
+OBJ
=VAL :ident
=VAL :42
-OBJ";
pub const QUOTED_KEY_EVENTS: &str = r#"
+OBJ
=VAL "ident
=VAL :42
-OBJ"#;

pub const CONFIG_INPUT: &str = r#"
context.properties = {
    log.level = 2
}
"#;
pub const CONFIG_EVENTS: &str = r"
=VAL :context.properties
ERR";

pub const CONFIG_COLON_INPUT: &str = r#"
context.properties: {
    log.level: 2
    default.clock.rate: 48000
}
context.modules: [
    { name: libpipewire-module-rt args: { nice.level: -11 } }
    { name: libpipewire-module-protocol-native }
]
"#;
pub const CONFIG_COLON_EVENTS: &str = r"
=VAL :context.properties
+OBJ
=VAL :log.level
=VAL :2
=VAL :default.clock.rate
=VAL :48000
-OBJ
=VAL :context.modules
+ARR
+OBJ
=VAL :name
=VAL :libpipewire-module-rt
=VAL :args
+OBJ
=VAL :nice.level
=VAL :-11
-OBJ
-OBJ
+OBJ
=VAL :name
=VAL :libpipewire-module-protocol-native
-OBJ
-ARR";

pub const KEYWORDS_INPUT: &str = "[true false null]";
pub const KEYWORDS_EVENTS: &str = r"
+ARR
=VAL :true
=VAL :false
=VAL :null
-ARR";

pub const NUMBERS_INPUT: &str = "[0 -1 3.25 -2.5e-3 1E10]";
pub const NUMBERS_EVENTS: &str = r"
+ARR
=VAL :0
=VAL :-1
=VAL :3.25
=VAL :-2.5e-3
=VAL :1E10
-ARR";

pub const STR_ESCAPES_INPUT: &str = r#"["\"" "\\" "\/" "\b\f\n\r\t"]"#;
pub const STR_ESCAPES_EVENTS: &str = r#"
+ARR
=VAL "\"
=VAL "\\
=VAL "\/
=VAL "\b\f\n\r\t
-ARR"#;

pub const STR_UTF8_INPUT: &str = r#"{"jezik": "srpski ћирилица", "emoji": "🦀"}"#;
pub const STR_UTF8_EVENTS: &str = r#"
+OBJ
=VAL "jezik
=VAL "srpski ћирилица
=VAL "emoji
=VAL "🦀
-OBJ"#;

pub const STR_BRACKETS_INPUT: &str = r#"["]", "}", "[{"]"#;
pub const STR_BRACKETS_EVENTS: &str = r#"
+ARR
=VAL "]
=VAL "}
=VAL "[{
-ARR"#;

pub const EMPTY_INPUT: &str = "   \n\t ";
pub const EMPTY_EVENTS: &str = "";

pub const EMPTY_CONTAINERS_INPUT: &str = "[{} [] {a: []}]";
pub const EMPTY_CONTAINERS_EVENTS: &str = r"
+ARR
+OBJ
-OBJ
+ARR
-ARR
+OBJ
=VAL :a
+ARR
-ARR
-OBJ
-ARR";

pub const ROOT_SCALARS_INPUT: &str = r#"first "second" third"#;
pub const ROOT_SCALARS_EVENTS: &str = r#"
=VAL :first
=VAL "second
=VAL :third"#;

pub const BARE_TOUCHING_INPUT: &str = "[a]{b}";
pub const BARE_TOUCHING_EVENTS: &str = r"
+ARR
=VAL :a
-ARR
+OBJ
=VAL :b
-OBJ";

pub const ERR_TRUNCATED_STR_INPUT: &str = r#""abc"#;
pub const ERR_TRUNCATED_STR_EVENTS: &str = r"
ERR";

pub const ERR_ESCAPE_INPUT: &str = r#"["ok" "\q"]"#;
pub const ERR_ESCAPE_EVENTS: &str = r#"
+ARR
=VAL "ok
ERR"#;

pub const ERR_UNTERMINATED_OBJ_INPUT: &str = r#"{"a":1"#;
pub const ERR_UNTERMINATED_OBJ_EVENTS: &str = r#"
+OBJ
=VAL "a
ERR"#;

pub const ERR_UNTERMINATED_NESTED_INPUT: &str = "[[1] [2";
pub const ERR_UNTERMINATED_NESTED_EVENTS: &str = r"
+ARR
+ARR
=VAL :1
-ARR
+ARR
ERR";

pub const ERR_STRAY_INPUT: &str = "[1 ; 2]";
pub const ERR_STRAY_EVENTS: &str = r"
+ARR
=VAL :1
ERR";

pub const ERR_CONTROL_IN_BARE_INPUT: &str = "[ab\u{7}c]";
pub const ERR_CONTROL_IN_BARE_EVENTS: &str = r"
+ARR
ERR";
