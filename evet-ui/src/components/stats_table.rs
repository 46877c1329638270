//! Summary statistics table.

use crate::state::AppState;
use dioxus::prelude::*;
use evet_core::Variable;

const CELL_STYLE: &str = "padding: 6px 10px; border-bottom: 1px solid #e0e0e0; text-align: right;";
const HEAD_STYLE: &str = "padding: 6px 10px; border-bottom: 2px solid #bbb; text-align: right;";

/// Mean/min/max/std table for all three variables, recomputed from the
/// store on every data version bump so it can never display stale values.
#[component]
pub fn StatsTable() -> Element {
    let state = use_context::<AppState>();
    let _version = (state.data_version)();
    let stats = state.store.read().statistics();

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    th { style: "{HEAD_STYLE} text-align: left;", "Variable" }
                    th { style: "{HEAD_STYLE}", "Mean" }
                    th { style: "{HEAD_STYLE}", "Min" }
                    th { style: "{HEAD_STYLE}", "Max" }
                    th { style: "{HEAD_STYLE}", "Std Dev" }
                }
            }
            tbody {
                for variable in Variable::ALL {
                    tr {
                        td {
                            style: "{CELL_STYLE} text-align: left;",
                            strong { {variable.label()} }
                        }
                        td { style: "{CELL_STYLE}", {format!("{:.3}", stats.get(variable).mean)} }
                        td { style: "{CELL_STYLE}", {format!("{:.3}", stats.get(variable).min)} }
                        td { style: "{CELL_STYLE}", {format!("{:.3}", stats.get(variable).max)} }
                        td { style: "{CELL_STYLE}", {format!("{:.3}", stats.get(variable).std)} }
                    }
                }
            }
        }
    }
}
