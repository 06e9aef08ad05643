use criterion::{Criterion, black_box, criterion_group, criterion_main};

use php_sfc_types::{EmbeddedCode, LanguagePlugin, PhpBlockPlugin, Sfc, SfcBlock};

fn sfc_with(content: String) -> Sfc {
    Sfc {
        custom_blocks: vec![SfcBlock {
            name: "customBlock_0".to_string(),
            block_type: "php".to_string(),
            content,
            start: 0,
        }],
    }
}

fn fragment(vars: usize) -> String {
    let mut text = String::new();
    for i in 0..vars {
        text.push_str(&format!("$v{i} = 'value {i}';\n"));
    }
    let names: Vec<String> = (0..vars).map(|i| format!("$v{i}")).collect();
    text.push_str(&format!("export({});\n", names.join(", ")));
    text
}

fn bench_resolve(c: &mut Criterion) {
    let sfc = sfc_with(fragment(50));

    c.bench_function("resolve_cold", |b| {
        b.iter(|| {
            let plugin = PhpBlockPlugin::default();
            let mut embedded = EmbeddedCode::new("script_ts");
            plugin.resolve_embedded_code("Bench.vue", black_box(&sfc), &mut embedded);
            embedded
        })
    });

    let plugin = PhpBlockPlugin::default();
    c.bench_function("resolve_cached", |b| {
        b.iter(|| {
            let mut embedded = EmbeddedCode::new("script_ts");
            plugin.resolve_embedded_code("Bench.vue", black_box(&sfc), &mut embedded);
            embedded
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
