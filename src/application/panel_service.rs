// Panel service - Fold backend events into facts and publish render passes
use std::time::Duration;

use futures::future;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

use crate::application::aggregation::BucketAggregator;
use crate::application::ring_encoder::{GoalRingEncoder, chart_layout};
use crate::domain::display::{DisplayFacts, DisplayView};
use crate::domain::events::BackendEvent;
use crate::domain::render::{ChartRender, DAY_LABELS, DayRender, PanelRender};
use crate::domain::samples::Bucket;
use crate::infrastructure::config::PanelConfig;

/// Events arriving within this window coalesce into a single render pass.
const RENDER_DEBOUNCE: Duration = Duration::from_millis(500);

/// Owns the panel's facts and the render output channel.
///
/// Events are processed run-to-completion on a single task, so facts never
/// see concurrent mutation.
pub struct PanelService {
    config: PanelConfig,
    aggregator: BucketAggregator,
    encoder: GoalRingEncoder,
    facts: DisplayFacts,
    render_tx: watch::Sender<PanelRender>,
}

impl PanelService {
    pub fn new(config: PanelConfig) -> (Self, watch::Receiver<PanelRender>) {
        let (render_tx, render_rx) = watch::channel(PanelRender::Unauthenticated);
        let aggregator = BucketAggregator::new(config.imperial);
        let encoder = GoalRingEncoder::new(config.step_goal, config.colors.clone());

        (
            Self {
                config,
                aggregator,
                encoder,
                facts: DisplayFacts::default(),
                render_tx,
            },
            render_rx,
        )
    }

    /// Event loop: drains the inbound stream until the senders are dropped,
    /// publishing a debounced render after each burst of events.
    pub async fn run(mut self, mut events: mpsc::Receiver<BackendEvent>) {
        let mut flush_at: Option<Instant> = None;

        loop {
            let flush = async move {
                match flush_at {
                    Some(at) => time::sleep_until(at).await,
                    None => future::pending().await,
                }
            };

            tokio::select! {
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => {
                        self.apply_event(&event);
                        flush_at.get_or_insert_with(|| Instant::now() + RENDER_DEBOUNCE);
                    }
                    None => break,
                },
                () = flush => {
                    self.publish();
                    flush_at = None;
                }
            }
        }

        // Anything still pending when the stream closes gets one last pass.
        if flush_at.is_some() {
            self.publish();
        }
    }

    pub fn apply_event(&mut self, event: &BackendEvent) {
        tracing::debug!(name = event.name(), "backend event");
        self.facts = self.facts.apply(event);
    }

    /// Assemble render instructions from the current facts.
    pub fn render(&self) -> PanelRender {
        match self.facts.view() {
            DisplayView::DataReady(buckets) => PanelRender::DataReady {
                chart: self.assemble_chart(buckets),
            },
            DisplayView::CodeIssued(code) => PanelRender::CodeIssued {
                verification_url: code.verification_url.clone(),
                user_code: code.user_code.clone(),
            },
            DisplayView::Authenticated => PanelRender::Authenticated,
            DisplayView::ErrorState(message) => PanelRender::Error {
                message: message.to_string(),
            },
            DisplayView::Unauthenticated => PanelRender::Unauthenticated,
        }
    }

    fn assemble_chart(&self, buckets: &[Bucket]) -> ChartRender {
        let records = self.aggregator.reduce(buckets);
        let num_days = records.len();
        let layout = chart_layout(self.config.chart_width, num_days);
        let has_weights = records.iter().any(|r| r.weight_average.is_some());

        let days = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| DayRender {
                label: DAY_LABELS[i % DAY_LABELS.len()].to_string(),
                segments: self.encoder.encode(record.step_total),
                cell: layout.cell(i),
                date: record.date,
                step_total: record.step_total,
                weight: record.weight_average,
            })
            .collect();

        ChartRender {
            width: self.config.chart_width,
            height: layout.cell_size,
            font_size: self.config.font_size,
            show_step_icon: self.config.use_icons,
            show_weight_icon: self.config.use_icons && has_weights,
            days,
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.render());
    }
}
