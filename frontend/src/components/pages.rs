//! 受保护页面
//!
//! 数据展示由各页面自行向后端请求；这里只提供页面骨架和静态参考信息。

use crate::components::shell::AppShell;
use crate::web::route::AppRoute;
use leptos::prelude::*;
use scoutlens_shared::position::{Position, Slot, eligible_positions};
use scoutlens_shared::translate_position;

#[component]
pub fn TeamSelectionPage() -> impl IntoView {
    view! {
        <AppShell route=AppRoute::TeamSelection>
            <p class="text-base-content/70">"选择一支球队以查看其球员与阵容。"</p>
        </AppShell>
    }
}

#[component]
pub fn RankingsPage() -> impl IntoView {
    view! {
        <AppShell route=AppRoute::Rankings>
            <p class="text-base-content/70">"按赛季数据查看球员排行。"</p>
        </AppShell>
    }
}

/// 阵容评分页：附带槽位与可出任位置对照表
#[component]
pub fn LineupRatingsPage() -> impl IntoView {
    let rows = Slot::ORDER
        .into_iter()
        .map(|slot| {
            let positions = eligible_positions(slot)
                .into_iter()
                .map(|p: Position| translate_position(p.label()))
                .collect::<Vec<_>>()
                .join(" / ");
            view! {
                <tr>
                    <td class="font-mono">{slot.code()}</td>
                    <td>{slot.display_name()}</td>
                    <td>{positions}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <AppShell route=AppRoute::LineupRatings>
            <table class="table bg-base-100">
                <thead>
                    <tr>
                        <th>"槽位"</th>
                        <th>"名称"</th>
                        <th>"可出任位置"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </AppShell>
    }
}

#[component]
pub fn PlayerComparisonPage() -> impl IntoView {
    view! {
        <AppShell route=AppRoute::PlayerComparison>
            <p class="text-base-content/70">"选择两名球员对比场均数据。"</p>
        </AppShell>
    }
}

#[component]
pub fn ValueForMoneyPage() -> impl IntoView {
    view! {
        <AppShell route=AppRoute::ValueForMoney>
            <p class="text-base-content/70">"结合薪资与表现评估球员性价比。"</p>
        </AppShell>
    }
}
