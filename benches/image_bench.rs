//! Vdec 命令块构建性能基准测试.
//!
//! 覆盖任务准备路径的两个热点: 寄存器镜像填写与 VP9 概率平面打包.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vdec::vdpu381::{DecMode, RegImage, TimeoutThreshold, coeff, layout, write_coeff_plane};

fn bench_image_fill(c: &mut Criterion) {
    c.bench_function("vp9_image_fill", |b| {
        b.iter(|| {
            let mut img = RegImage::new(DecMode::Vp9).unwrap();
            img.set_timeout(TimeoutThreshold::Full1080p);
            img.set(layout::common::STREAM_LEN, black_box(0x6000));
            for i in 0..layout::vp9::SEGID_GROUP_COUNT {
                img.set(layout::vp9::segid_frame_qp_delta(i), black_box(12));
            }
            for i in 0..layout::addr::COLMV_BASE_COUNT {
                img.set(layout::addr::vp9_colmv_base(i), black_box(0x1000_0000));
            }
            img.set_dec_enable(true);
            black_box(img.as_bytes())
        });
    });
}

fn bench_coeff_pack(c: &mut Criterion) {
    c.bench_function("coeff_plane_pack", |b| {
        let mut coef = [[[0u8; 3]; 6]; 6];
        let mut v = 0u8;
        for row in &mut coef {
            for col in row.iter_mut() {
                for p in col.iter_mut() {
                    *p = v;
                    v = v.wrapping_add(1);
                }
            }
        }
        let mut plane = [0u8; coeff::COEFF_PLANE_BYTES];
        b.iter(|| {
            write_coeff_plane(black_box(&coef), &mut plane).unwrap();
            black_box(plane[0])
        });
    });
}

criterion_group!(benches, bench_image_fill, bench_coeff_pack);
criterion_main!(benches);
