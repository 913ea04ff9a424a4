use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use menu_core::config::NavigatorConfig;
use menu_core::{Navigator, Screen, ScreenKey, TransitionMode};
use menu_core::visual::Content;

struct NullContent;
impl Content for NullContent {
    fn set_active(&mut self, _active: bool) {}
}

fn make_navigator(screens: usize) -> Navigator {
    let mut found: Vec<Screen> = (0..screens)
        .map(|i| {
            Screen::builder(format!("screen{i}"))
                .transition(TransitionMode::Activate)
                .content(NullContent)
                .build()
        })
        .collect();

    let mut nav = Navigator::new(NavigatorConfig {
        start_screen: Some("screen0".into()),
        ..NavigatorConfig::default()
    });
    nav.start(&mut found);
    nav
}

fn bench_navigation(c: &mut Criterion) {
    const SCREENS: usize = 64;
    const STEPS: usize = 10_000;
    let mut group = c.benchmark_group("navigation");
    group.sample_size(20);

    let keys: Vec<ScreenKey> = {
        let nav = make_navigator(SCREENS);
        (0..SCREENS).filter_map(|i| nav.key_of(&format!("screen{i}"))).collect()
    };

    group.bench_function("forward_then_back_all", |b| {
        b.iter_batched(
            || make_navigator(SCREENS),
            |mut nav| {
                for step in 1..=STEPS {
                    nav.set_current_screen(keys[step % SCREENS]);
                }
                nav.back_all();
                nav
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("switch_to", |b| {
        b.iter_batched(
            || make_navigator(SCREENS),
            |mut nav| {
                for step in 0..STEPS {
                    nav.switch_to(keys[step % SCREENS]);
                }
                nav
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_navigation);
criterion_main!(benches);
