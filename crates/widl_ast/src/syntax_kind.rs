//! SyntaxKind enum - all token kinds produced by the WebIDL scanner.
//!
//! WebIDL treats its keywords as terminal symbols of the grammar, so every
//! keyword gets its own kind. Several keywords double as argument names
//! (the grammar's ArgumentNameKeyword production); see
//! [`SyntaxKind::is_argument_name_keyword`].

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    IntegerLiteral,
    DecimalLiteral,
    StringLiteral,
    Identifier,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    LessThanToken,
    GreaterThanToken,
    CommaToken,
    SemicolonToken,
    ColonToken,
    EqualsToken,
    QuestionToken,
    MinusToken,
    AsteriskToken,
    DotDotDotToken,

    // Definition keywords
    CallbackKeyword,
    DictionaryKeyword,
    EnumKeyword,
    IncludesKeyword,
    InterfaceKeyword,
    MixinKeyword,
    NamespaceKeyword,
    PartialKeyword,
    TypedefKeyword,

    // Member keywords
    AsyncKeyword,
    AttributeKeyword,
    ConstKeyword,
    ConstructorKeyword,
    DeleterKeyword,
    GetterKeyword,
    InheritKeyword,
    IterableKeyword,
    MaplikeKeyword,
    OptionalKeyword,
    ReadonlyKeyword,
    RequiredKeyword,
    SetlikeKeyword,
    SetterKeyword,
    StaticKeyword,
    StringifierKeyword,

    // Type keywords
    AnyKeyword,
    BigintKeyword,
    BooleanKeyword,
    ByteKeyword,
    ByteStringKeyword,
    DOMStringKeyword,
    DoubleKeyword,
    FloatKeyword,
    FrozenArrayKeyword,
    LongKeyword,
    ObjectKeyword,
    ObservableArrayKeyword,
    OctetKeyword,
    OrKeyword,
    PromiseKeyword,
    RecordKeyword,
    SequenceKeyword,
    ShortKeyword,
    SymbolKeyword,
    UndefinedKeyword,
    UnrestrictedKeyword,
    UnsignedKeyword,
    USVStringKeyword,
    VoidKeyword,

    // Value keywords
    FalseKeyword,
    InfinityKeyword,
    NaNKeyword,
    NullKeyword,
    TrueKeyword,
}

impl SyntaxKind {
    /// Map an identifier-shaped word to its keyword kind, if it is one.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        use SyntaxKind::*;
        Some(match text {
            "any" => AnyKeyword,
            "async" => AsyncKeyword,
            "attribute" => AttributeKeyword,
            "bigint" => BigintKeyword,
            "boolean" => BooleanKeyword,
            "byte" => ByteKeyword,
            "ByteString" => ByteStringKeyword,
            "callback" => CallbackKeyword,
            "const" => ConstKeyword,
            "constructor" => ConstructorKeyword,
            "deleter" => DeleterKeyword,
            "dictionary" => DictionaryKeyword,
            "DOMString" => DOMStringKeyword,
            "double" => DoubleKeyword,
            "enum" => EnumKeyword,
            "false" => FalseKeyword,
            "float" => FloatKeyword,
            "FrozenArray" => FrozenArrayKeyword,
            "getter" => GetterKeyword,
            "includes" => IncludesKeyword,
            "Infinity" => InfinityKeyword,
            "inherit" => InheritKeyword,
            "interface" => InterfaceKeyword,
            "iterable" => IterableKeyword,
            "long" => LongKeyword,
            "maplike" => MaplikeKeyword,
            "mixin" => MixinKeyword,
            "namespace" => NamespaceKeyword,
            "NaN" => NaNKeyword,
            "null" => NullKeyword,
            "object" => ObjectKeyword,
            "ObservableArray" => ObservableArrayKeyword,
            "octet" => OctetKeyword,
            "optional" => OptionalKeyword,
            "or" => OrKeyword,
            "partial" => PartialKeyword,
            "Promise" => PromiseKeyword,
            "readonly" => ReadonlyKeyword,
            "record" => RecordKeyword,
            "required" => RequiredKeyword,
            "sequence" => SequenceKeyword,
            "setlike" => SetlikeKeyword,
            "setter" => SetterKeyword,
            "short" => ShortKeyword,
            "static" => StaticKeyword,
            "stringifier" => StringifierKeyword,
            "symbol" => SymbolKeyword,
            "true" => TrueKeyword,
            "typedef" => TypedefKeyword,
            "undefined" => UndefinedKeyword,
            "unrestricted" => UnrestrictedKeyword,
            "unsigned" => UnsignedKeyword,
            "USVString" => USVStringKeyword,
            "void" => VoidKeyword,
            _ => return None,
        })
    }

    /// The source spelling of a keyword kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        use SyntaxKind::*;
        Some(match self {
            AnyKeyword => "any",
            AsyncKeyword => "async",
            AttributeKeyword => "attribute",
            BigintKeyword => "bigint",
            BooleanKeyword => "boolean",
            ByteKeyword => "byte",
            ByteStringKeyword => "ByteString",
            CallbackKeyword => "callback",
            ConstKeyword => "const",
            ConstructorKeyword => "constructor",
            DeleterKeyword => "deleter",
            DictionaryKeyword => "dictionary",
            DOMStringKeyword => "DOMString",
            DoubleKeyword => "double",
            EnumKeyword => "enum",
            FalseKeyword => "false",
            FloatKeyword => "float",
            FrozenArrayKeyword => "FrozenArray",
            GetterKeyword => "getter",
            IncludesKeyword => "includes",
            InfinityKeyword => "Infinity",
            InheritKeyword => "inherit",
            InterfaceKeyword => "interface",
            IterableKeyword => "iterable",
            LongKeyword => "long",
            MaplikeKeyword => "maplike",
            MixinKeyword => "mixin",
            NamespaceKeyword => "namespace",
            NaNKeyword => "NaN",
            NullKeyword => "null",
            ObjectKeyword => "object",
            ObservableArrayKeyword => "ObservableArray",
            OctetKeyword => "octet",
            OptionalKeyword => "optional",
            OrKeyword => "or",
            PartialKeyword => "partial",
            PromiseKeyword => "Promise",
            ReadonlyKeyword => "readonly",
            RecordKeyword => "record",
            RequiredKeyword => "required",
            SequenceKeyword => "sequence",
            SetlikeKeyword => "setlike",
            SetterKeyword => "setter",
            ShortKeyword => "short",
            StaticKeyword => "static",
            StringifierKeyword => "stringifier",
            SymbolKeyword => "symbol",
            TrueKeyword => "true",
            TypedefKeyword => "typedef",
            UndefinedKeyword => "undefined",
            UnrestrictedKeyword => "unrestricted",
            UnsignedKeyword => "unsigned",
            USVStringKeyword => "USVString",
            VoidKeyword => "void",
            _ => return None,
        })
    }

    /// The source spelling of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        use SyntaxKind::*;
        Some(match self {
            OpenBraceToken => "{",
            CloseBraceToken => "}",
            OpenParenToken => "(",
            CloseParenToken => ")",
            OpenBracketToken => "[",
            CloseBracketToken => "]",
            LessThanToken => "<",
            GreaterThanToken => ">",
            CommaToken => ",",
            SemicolonToken => ";",
            ColonToken => ":",
            EqualsToken => "=",
            QuestionToken => "?",
            MinusToken => "-",
            AsteriskToken => "*",
            DotDotDotToken => "...",
            _ => return None,
        })
    }

    /// Spelling of the token kind, for expectation messages.
    pub fn token_text(self) -> Option<&'static str> {
        self.punctuation_text().or_else(|| self.keyword_text())
    }

    pub fn is_keyword(self) -> bool {
        self >= SyntaxKind::CallbackKeyword
    }

    /// Keywords the grammar allows as argument names (ArgumentNameKeyword).
    pub fn is_argument_name_keyword(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            AsyncKeyword
                | AttributeKeyword
                | CallbackKeyword
                | ConstKeyword
                | ConstructorKeyword
                | DeleterKeyword
                | DictionaryKeyword
                | EnumKeyword
                | GetterKeyword
                | IncludesKeyword
                | InheritKeyword
                | InterfaceKeyword
                | IterableKeyword
                | MaplikeKeyword
                | MixinKeyword
                | NamespaceKeyword
                | PartialKeyword
                | ReadonlyKeyword
                | RequiredKeyword
                | SetlikeKeyword
                | SetterKeyword
                | StaticKeyword
                | StringifierKeyword
                | TypedefKeyword
                | UnrestrictedKeyword
        )
    }
}
