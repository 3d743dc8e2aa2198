use std::env::current_dir;
use std::fs::create_dir_all;

use arena_bracket::{BracketView, Match, MatchRecord, Podium, Slot, SlotLabel, TeamRanking};
use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(MatchRecord), &out_dir);
    export_schema(&schema_for!(Match), &out_dir);
    export_schema(&schema_for!(Slot), &out_dir);
    export_schema(&schema_for!(SlotLabel), &out_dir);
    export_schema(&schema_for!(TeamRanking), &out_dir);
    export_schema(&schema_for!(BracketView), &out_dir);
    export_schema(&schema_for!(Podium), &out_dir);
}
