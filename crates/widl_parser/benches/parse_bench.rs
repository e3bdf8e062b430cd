use criterion::{black_box, criterion_group, criterion_main, Criterion};
use widl_parser::parse;
use widl_scanner::tokenize;

// A medium-size WebIDL fragment with a spread of constructs
const IDL_SOURCE: &str = r#"
[Exposed=Window]
interface Event {
    constructor(DOMString type, optional EventInit eventInitDict = {});
    readonly attribute DOMString type;
    readonly attribute EventTarget? target;
    readonly attribute EventTarget? currentTarget;
    sequence<EventTarget> composedPath();

    const unsigned short NONE = 0;
    const unsigned short CAPTURING_PHASE = 1;
    const unsigned short AT_TARGET = 2;
    const unsigned short BUBBLING_PHASE = 3;
    readonly attribute unsigned short eventPhase;

    undefined stopPropagation();
    undefined stopImmediatePropagation();
    readonly attribute boolean bubbles;
    readonly attribute boolean cancelable;
    undefined preventDefault();
    readonly attribute boolean defaultPrevented;
    readonly attribute boolean composed;

    readonly attribute boolean isTrusted;
    readonly attribute DOMHighResTimeStamp timeStamp;
};

dictionary EventInit {
    boolean bubbles = false;
    boolean cancelable = false;
    boolean composed = false;
};

[Exposed=(Window,Worker)]
interface URLSearchParams {
    constructor(optional (sequence<sequence<USVString>> or record<USVString, USVString> or USVString) init = "");

    readonly attribute unsigned long size;

    undefined append(USVString name, USVString value);
    undefined delete(USVString name, optional USVString value);
    USVString? get(USVString name);
    sequence<USVString> getAll(USVString name);
    boolean has(USVString name, optional USVString value);
    undefined set(USVString name, USVString value);

    undefined sort();

    iterable<USVString, USVString>;
    stringifier;
};

enum ShadowRootMode { "open", "closed" };
enum SlotAssignmentMode { "manual", "named" };

typedef (Int8Array or Int16Array or Int32Array or
         Uint8Array or Uint16Array or Uint32Array or Uint8ClampedArray or
         BigInt64Array or BigUint64Array or
         Float32Array or Float64Array or DataView) ArrayBufferView;

callback EventHandlerNonNull = any (Event event);
typedef EventHandlerNonNull? EventHandler;

interface mixin GlobalEventHandlers {
    attribute EventHandler onabort;
    attribute EventHandler onblur;
    attribute EventHandler onerror;
    attribute EventHandler onload;
};

Window includes GlobalEventHandlers;

namespace CSS {
    boolean supports(CSSOMString property, CSSOMString value);
    boolean supports(CSSOMString conditionText);
    CSSOMString escape(CSSOMString ident);
};
"#;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_idl_medium", |b| {
        b.iter(|| {
            for token in tokenize(black_box(IDL_SOURCE)) {
                black_box(token.unwrap());
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_idl_medium", |b| {
        b.iter(|| {
            let definitions = parse(black_box(IDL_SOURCE)).unwrap();
            black_box(definitions);
        });
    });
}

criterion_group!(benches, bench_tokenize, bench_parse);
criterion_main!(benches);
