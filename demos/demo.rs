use gpui::prelude::*;
use gpui::*;
use projection_chart::{MemoryFieldStore, ProjectionChartView, ProjectionWidget, RecordingHost, WidgetConfig};
use eyre::WrapErr;
use tracing::info;

struct DemoApp {
    chart: Entity<ProjectionChartView>,
}

impl DemoApp {
    pub fn new(config: WidgetConfig, store: MemoryFieldStore, cx: &mut Context<Self>) -> Self {
        let chart = cx.new(|cx| {
            let mut widget = ProjectionWidget::new(config, store.clone(), RecordingHost::new());
            if let Err(err) = widget.mount(0.0, || Ok(())) {
                tracing::error!(error = ?err, "chart failed to mount");
            }
            ProjectionChartView::new(widget, cx)
        });

        // Dump the stored answers whenever the chart changes.
        cx.observe(&chart, move |_, chart, cx| {
            if chart.read(cx).widget.state().is_locked() {
                match store.to_json() {
                    Ok(json) => info!("stored fields:\n{json}"),
                    Err(err) => tracing::warn!(error = ?err, "could not dump fields"),
                }
            }
        })
        .detach();

        Self { chart }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::white())
            .child(self.chart.clone())
    }
}

fn load_config() -> eyre::Result<WidgetConfig> {
    match std::env::var("PROJECTION_CHART_CONFIG") {
        Ok(path) => {
            let source = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("reading {path}"))?;
            WidgetConfig::from_json(&source)
        }
        Err(_) => Ok(WidgetConfig::default()),
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projection_chart=debug,info".into()),
        )
        .init();

    let config = load_config()?;
    let store = MemoryFieldStore::new();

    Application::new().run(move |cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(config, store, cx))
        })
        .expect("failed to open window");
    });
    Ok(())
}
