//! Inline event handler names.
//!
//! Handlers are JavaScript source strings attached to an element
//! (`onclick="submitForm()"`). Only the names listed here are accepted.

use strum_macros::{AsRefStr, Display, EnumString};

/// Recognized inline event handler attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Event {
    // Mouse
    OnClick,
    OnDblClick,
    OnMouseDown,
    OnMouseUp,
    OnMouseMove,
    OnMouseOver,
    OnMouseOut,
    OnMouseEnter,
    OnMouseLeave,
    OnContextMenu,
    OnWheel,
    OnScroll,

    // Drag and drop
    OnDrag,
    OnDragStart,
    OnDragEnd,
    OnDragEnter,
    OnDragLeave,
    OnDragOver,
    OnDrop,

    // Pointer
    OnPointerDown,
    OnPointerUp,
    OnPointerMove,
    OnPointerOver,
    OnPointerOut,
    OnPointerEnter,
    OnPointerLeave,
    OnPointerCancel,
    OnGotPointerCapture,
    OnLostPointerCapture,

    // Touch
    OnTouchStart,
    OnTouchEnd,
    OnTouchMove,
    OnTouchCancel,

    // Keyboard and text input
    OnKeyDown,
    OnKeyUp,
    OnKeyPress,
    OnInput,
    OnBeforeInput,
    OnCompositionStart,
    OnCompositionUpdate,
    OnCompositionEnd,

    // Forms and focus
    OnSubmit,
    OnReset,
    OnChange,
    OnSelect,
    OnInvalid,
    OnFocus,
    OnBlur,
    OnFocusIn,
    OnFocusOut,
    OnSearch,

    // Clipboard
    OnCopy,
    OnCut,
    OnPaste,
    OnBeforeCopy,
    OnBeforeCut,
    OnBeforePaste,

    // Media
    OnAbort,
    OnCanPlay,
    OnCanPlayThrough,
    OnDurationChange,
    OnEmptied,
    OnEnded,
    OnError,
    OnLoadedData,
    OnLoadedMetadata,
    OnLoadStart,
    OnPause,
    OnPlay,
    OnPlaying,
    OnProgress,
    OnRateChange,
    OnSeeked,
    OnSeeking,
    OnStalled,
    OnSuspend,
    OnTimeUpdate,
    OnVolumeChange,
    OnWaiting,
    OnCueChange,
    OnResize,

    // Document and window
    OnLoad,
    OnLoadEnd,
    OnUnload,
    OnBeforeUnload,
    OnPageShow,
    OnPageHide,
    OnReadyStateChange,
    OnAfterPrint,
    OnBeforePrint,
    OnFullscreenChange,
    OnFullscreenError,
    OnVisibilityChange,
    OnTimeout,

    // Animation and transitions
    OnAnimationStart,
    OnAnimationEnd,
    OnAnimationIteration,
    OnAnimationCancel,
    OnTransitionStart,
    OnTransitionEnd,
    OnTransitionRun,
    OnTransitionCancel,

    // Messaging and storage
    OnStorage,
    OnMessage,
    OnMessageError,
}
