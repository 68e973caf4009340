use super::charts::{Gauge, Sparkline};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour of a percentage badge, read off its sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Up,
    Down,
    Flat,
}

impl Tone {
    pub fn of(pct: &str) -> Self {
        match pct.trim() {
            p if p.starts_with('-') => Tone::Down,
            "0%" | "+0%" | "" => Tone::Flat,
            _ => Tone::Up,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Tone::Up => "stat-card__change stat-card__change--up",
            Tone::Down => "stat-card__change stat-card__change--down",
            Tone::Flat => "stat-card__change stat-card__change--flat",
        }
    }
}

/// Single formatted figure, e.g. total revenue
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
    /// Value is dimmed while the slot reloads
    #[prop(into, optional)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card" class:stat-card--loading=move || loading.get()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// Percentage KPI with subtitle and a sparkline of the underlying series
#[component]
pub fn KpiCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] pct: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(into)] trend: Signal<Vec<f64>>,
) -> impl IntoView {
    view! {
        <div class="stat-card stat-card--kpi">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || {
                        let pct = pct.get();
                        let class = Tone::of(&pct).class();
                        view! { <span class=class>{pct}</span> }
                    }}
                </div>
                <div class="stat-card__subtitle">{move || subtitle.get()}</div>
            </div>
            <div class="stat-card__spark">
                <Sparkline values=trend />
            </div>
        </div>
    }
}

/// Percentage KPI drawn as a half-donut gauge, figure under the arc
#[component]
pub fn GaugeCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] pct: Signal<String>,
    #[prop(into)] percent: Signal<i64>,
    #[prop(into)] subtitle: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card stat-card--gauge">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__gauge">
                <Gauge percent=percent />
                <div class="stat-card__gauge-value">{move || pct.get()}</div>
            </div>
            <div class="stat-card__subtitle">{move || subtitle.get()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_of() {
        assert_eq!(Tone::of("+12%"), Tone::Up);
        assert_eq!(Tone::of("+100%"), Tone::Up);
        assert_eq!(Tone::of("-3%"), Tone::Down);
        assert_eq!(Tone::of("0%"), Tone::Flat);
        assert_eq!(Tone::of("+0%"), Tone::Flat);
        assert_eq!(Tone::of("67%"), Tone::Up);
    }
}
