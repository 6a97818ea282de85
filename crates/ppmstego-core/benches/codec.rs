use criterion::{criterion_group, criterion_main, Criterion};
use ppmstego_core::{LsbCodec, PpmImage, Rgb};

fn carrier() -> PpmImage {
    PpmImage::from_fn(128, 128, 255, |x, y| {
        Rgb::new((x * 2) as u16, (y * 2) as u16, ((x + y) % 255) as u16)
    })
}

pub fn message_embedding(c: &mut Criterion) {
    c.bench_function("Message Embedding", |b| {
        let plain_image = carrier();
        let payload = b"Hello World!\n";

        b.iter(|| {
            LsbCodec::embed(plain_image.clone(), payload, 1337)
                .expect("Cannot embed message");
        })
    });
}

pub fn message_extraction(c: &mut Criterion) {
    c.bench_function("Message Extraction", |b| {
        let marked_image = LsbCodec::embed(carrier(), b"Hello World!\n", 1337)
            .expect("Cannot embed message");

        b.iter(|| {
            LsbCodec::extract(&marked_image, 1337)
                .expect("Cannot extract message");
        })
    });
}

criterion_group!(benches, message_embedding, message_extraction);
criterion_main!(benches);
